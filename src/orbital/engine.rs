//! Per-frame orbital update.
//!
//! Positions are closed-form: each proxy sits on a circle of radius
//! `distance` in its parent's XZ plane at the angle accumulated in [`Spin`].

use bevy::prelude::*;

use crate::bodies::{BodyRegistry, PrimaryBody, Satellite, SatelliteMotion};
use crate::config::SceneConfig;
use crate::scene::{SceneProxies, Star};

/// Accumulated rotation about the vertical axis on top of a fixed base
/// orientation. The angle is never wrapped.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub angle: f32,
    pub base: Quat,
}

impl Default for Spin {
    fn default() -> Self {
        Self::with_base(Quat::IDENTITY)
    }
}

impl Spin {
    pub fn with_base(base: Quat) -> Self {
        Self { angle: 0.0, base }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.angle) * self.base
    }

    fn advance(&mut self, delta: f32, transform: &mut Transform) {
        self.angle += delta;
        transform.rotation = self.rotation();
    }
}

/// Frames elapsed on the orbital clock.
#[derive(Resource, Default, Debug)]
pub struct OrbitalClock {
    pub frames: u64,
}

fn place_on_orbit(transform: &mut Transform, angle: f32, distance: f32) {
    transform.translation.x = angle.sin() * distance;
    transform.translation.z = angle.cos() * distance;
}

/// Move a primary to the position for its current angle, then step the angle.
/// The emitted position therefore lags the stored angle by one tick.
pub fn advance_primary(body: &PrimaryBody, transform: &mut Transform, spin: &mut Spin) {
    place_on_orbit(transform, spin.angle, body.distance);
    spin.advance(body.speed, transform);
}

/// Step a satellite's angle, then move it. Decorations are left untouched.
pub fn advance_satellite(satellite: &Satellite, transform: &mut Transform, spin: &mut Spin) {
    let SatelliteMotion::Orbiting { speed } = satellite.motion else {
        return;
    };
    spin.advance(speed, transform);
    place_on_orbit(transform, spin.angle, satellite.distance);
}

/// Advance every primary and its satellites by one frame.
pub fn advance_frame(
    registry: Res<BodyRegistry>,
    proxies: Option<Res<SceneProxies>>,
    mut clock: ResMut<OrbitalClock>,
    mut query: Query<(&mut Transform, &mut Spin), Without<Star>>,
) {
    let Some(proxies) = proxies else {
        return;
    };

    for (body, proxy) in registry.primaries.iter().zip(&proxies.primaries) {
        if let Ok((mut transform, mut spin)) = query.get_mut(proxy.entity) {
            advance_primary(body, &mut transform, &mut spin);
        }
        for (satellite, &entity) in body.satellites.iter().zip(&proxy.satellites) {
            if let Ok((mut transform, mut spin)) = query.get_mut(entity) {
                advance_satellite(satellite, &mut transform, &mut spin);
            }
        }
    }

    clock.frames += 1;
}

/// Cosmetic self-rotation of the star.
pub fn spin_star(
    config: Res<SceneConfig>,
    mut query: Query<(&mut Transform, &mut Spin), With<Star>>,
) {
    for (mut transform, mut spin) in &mut query {
        spin.advance(config.star.spin_per_frame, &mut transform);
    }
}
