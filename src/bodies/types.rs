//! Body registry data types

use bevy::prelude::*;

/// Satellite name that marks Saturn's ring rather than an orbiting moon.
pub const RING_SATELLITE_NAME: &str = "saturnRings";

/// How a satellite moves relative to its primary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SatelliteMotion {
    /// Circles its primary by `speed` radians per frame.
    Orbiting { speed: f32 },
    /// Attached to the primary but never advanced (the ring).
    StaticDecoration,
}

/// A moon, or the ring decoration, attached to a primary.
#[derive(Clone, Debug, PartialEq)]
pub struct Satellite {
    pub name: String,
    pub radius: f32,
    /// Orbital radius from the primary, in the primary's local frame.
    pub distance: f32,
    pub motion: SatelliteMotion,
}

impl Satellite {
    /// Build a satellite from its catalog values, resolving the reserved ring
    /// name to a static decoration. The ring's speed is discarded.
    pub fn new(name: impl Into<String>, radius: f32, distance: f32, speed: f32) -> Self {
        let name = name.into();
        let motion = if name == RING_SATELLITE_NAME {
            SatelliteMotion::StaticDecoration
        } else {
            SatelliteMotion::Orbiting { speed }
        };
        Self {
            name,
            radius,
            distance,
            motion,
        }
    }

    pub fn is_decoration(&self) -> bool {
        matches!(self.motion, SatelliteMotion::StaticDecoration)
    }
}

/// A planet orbiting the central star.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimaryBody {
    pub name: String,
    /// Visual scale factor applied to the unit sphere.
    pub radius: f32,
    /// Orbital radius from the star at the origin.
    pub distance: f32,
    /// Angular velocity in radians per frame; the sign gives the direction.
    pub speed: f32,
    /// Surface texture asset path.
    pub texture: String,
    pub satellites: Vec<Satellite>,
}

impl PrimaryBody {
    pub fn new(
        name: impl Into<String>,
        radius: f32,
        distance: f32,
        speed: f32,
        texture: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            radius,
            distance,
            speed,
            texture: texture.into(),
            satellites: Vec::new(),
        }
    }

    pub fn with_satellite(mut self, satellite: Satellite) -> Self {
        self.satellites.push(satellite);
        self
    }
}

/// Order-stable catalog of primaries. Index identifies a primary for the
/// lifetime of the app and matches [`crate::scene::SceneProxies`].
#[derive(Resource, Clone, Debug, Default)]
pub struct BodyRegistry {
    pub primaries: Vec<PrimaryBody>,
}

impl BodyRegistry {
    pub fn new(primaries: Vec<PrimaryBody>) -> Self {
        Self { primaries }
    }

    pub fn len(&self) -> usize {
        self.primaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primaries.is_empty()
    }

    pub fn satellite_count(&self) -> usize {
        self.primaries.iter().map(|p| p.satellites.len()).sum()
    }
}
