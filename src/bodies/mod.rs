//! Body registry module
//!
//! Holds the static catalog of planets and their satellites, along with the
//! orbital parameters that the parameter panel edits at runtime.

use bevy::prelude::*;

pub mod catalog;
pub mod types;

pub use catalog::{MOON_TEXTURE, RING_TEXTURE, SUN_TEXTURE, solar_system};
pub use types::{BodyRegistry, PrimaryBody, RING_SATELLITE_NAME, Satellite, SatelliteMotion};

/// Plugin that installs the body registry
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        let registry = BodyRegistry::new(solar_system());
        info!(
            "Body registry: {} primaries, {} satellites",
            registry.len(),
            registry.satellite_count()
        );
        app.insert_resource(registry);
    }
}
