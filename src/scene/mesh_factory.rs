//! Proxy blueprints for celestial bodies.
//!
//! A blueprint describes geometry and the initial transform; the composer
//! turns it into an entity. Spheres share one unit mesh and are sized purely
//! through `Transform::scale`.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::bodies::{PrimaryBody, Satellite, SatelliteMotion};
use crate::orbital::Spin;

/// Gap subtracted from a moon's distance so it clears its primary's surface.
pub const SATELLITE_CLEARANCE: f32 = 2.0;
pub const RING_INNER_MARGIN: f32 = 17.0;
pub const RING_OUTER_MARGIN: f32 = 23.0;
pub const RING_SEGMENTS: u32 = 32;
/// Inclination of the ring about X (~120 degrees).
pub const RING_TILT: f32 = PI / 1.5;
/// Half-turn about Y that lines texture seams up with the orbit.
pub const TEXTURE_SEAM_YAW: f32 = PI;
pub const SPHERE_SEGMENTS: u32 = 32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub segments: u32,
}

impl RingGeometry {
    /// Flat annulus in the local XY plane.
    pub fn mesh(&self) -> Mesh {
        Annulus::new(self.inner_radius, self.outer_radius)
            .mesh()
            .resolution(self.segments)
            .build()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProxyGeometry {
    UnitSphere,
    Ring(RingGeometry),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProxyBlueprint {
    pub geometry: ProxyGeometry,
    pub transform: Transform,
    pub spin: Spin,
}

impl ProxyBlueprint {
    fn new(geometry: ProxyGeometry, translation: Vec3, scale: f32, spin: Spin) -> Self {
        Self {
            geometry,
            transform: Transform::from_translation(translation)
                .with_rotation(spin.rotation())
                .with_scale(Vec3::splat(scale)),
            spin,
        }
    }
}

/// Shared unit sphere used by every spherical body.
pub fn unit_sphere_mesh() -> Mesh {
    Sphere::new(1.0).mesh().uv(SPHERE_SEGMENTS, SPHERE_SEGMENTS)
}

pub fn primary_proxy(body: &PrimaryBody) -> ProxyBlueprint {
    ProxyBlueprint::new(
        ProxyGeometry::UnitSphere,
        Vec3::new(body.distance, 0.0, 0.0),
        body.radius,
        Spin::with_base(Quat::from_rotation_y(TEXTURE_SEAM_YAW)),
    )
}

pub fn satellite_proxy(satellite: &Satellite) -> ProxyBlueprint {
    match satellite.motion {
        SatelliteMotion::StaticDecoration => {
            let mut blueprint = ring_proxy(satellite);
            blueprint.spin = Spin::with_base(Quat::from_rotation_x(RING_TILT));
            blueprint.transform.rotation = blueprint.spin.rotation();
            blueprint
        }
        SatelliteMotion::Orbiting { .. } => ProxyBlueprint::new(
            ProxyGeometry::UnitSphere,
            Vec3::new(satellite.distance - SATELLITE_CLEARANCE, 0.0, 0.0),
            satellite.radius,
            Spin::default(),
        ),
    }
}

/// Annulus with fixed additive margins around the satellite radius. Not tilted.
pub fn ring_proxy(satellite: &Satellite) -> ProxyBlueprint {
    let geometry = RingGeometry {
        inner_radius: satellite.radius + RING_INNER_MARGIN,
        outer_radius: satellite.radius + RING_OUTER_MARGIN,
        segments: RING_SEGMENTS,
    };
    ProxyBlueprint::new(
        ProxyGeometry::Ring(geometry),
        Vec3::new(satellite.distance, 0.0, 0.0),
        satellite.radius,
        Spin::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::RING_SATELLITE_NAME;

    #[test]
    fn test_primary_blueprint() {
        let body = PrimaryBody::new("Earth", 91.54, 10750.0, 0.002, "textures/earth.jpg");
        let blueprint = primary_proxy(&body);
        assert_eq!(blueprint.geometry, ProxyGeometry::UnitSphere);
        assert_eq!(blueprint.transform.translation, Vec3::new(10750.0, 0.0, 0.0));
        assert_eq!(blueprint.transform.scale, Vec3::splat(91.54));
        assert_eq!(blueprint.spin.angle, 0.0);
        let flipped = Quat::from_rotation_y(PI);
        assert!(blueprint.transform.rotation.abs_diff_eq(flipped, 1e-5));
    }

    #[test]
    fn test_moon_blueprint_keeps_clearance() {
        let moon = Satellite::new("Deimos", 0.24, 3.0, 0.015);
        let blueprint = satellite_proxy(&moon);
        assert_eq!(blueprint.geometry, ProxyGeometry::UnitSphere);
        assert_eq!(blueprint.transform.translation, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(blueprint.transform.scale, Vec3::splat(0.24));
        assert_eq!(blueprint.transform.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_ring_margins_are_additive() {
        for r in [0.1_f32, 1.0, 12.5] {
            let ring = Satellite::new(RING_SATELLITE_NAME, r, 2.0, 0.0);
            let ProxyGeometry::Ring(geometry) = ring_proxy(&ring).geometry else {
                panic!("ring satellite did not produce ring geometry");
            };
            assert_eq!(geometry.inner_radius, r + 17.0);
            assert_eq!(geometry.outer_radius, r + 23.0);
            assert_eq!(geometry.segments, 32);
        }
    }

    #[test]
    fn test_ring_sits_at_full_distance_and_tilts() {
        let ring = Satellite::new(RING_SATELLITE_NAME, 0.1, 2.0, 0.02);
        let blueprint = satellite_proxy(&ring);
        assert!(matches!(blueprint.geometry, ProxyGeometry::Ring(_)));
        assert_eq!(blueprint.transform.translation, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(blueprint.transform.scale, Vec3::splat(0.1));
        let tilt = Quat::from_rotation_x(2.0 * PI / 3.0);
        assert!(blueprint.transform.rotation.abs_diff_eq(tilt, 1e-5));
    }

    #[test]
    fn test_ring_proxy_alone_is_face_on() {
        let ring = Satellite::new(RING_SATELLITE_NAME, 0.1, 2.0, 0.02);
        assert_eq!(ring_proxy(&ring).transform.rotation, Quat::IDENTITY);
    }
}
