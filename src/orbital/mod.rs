//! Orbital motion module
//!
//! This module advances planets and moons along their circular orbits each
//! frame and applies parameter edits coming from the control panel.

use bevy::prelude::*;

pub mod bridge;
pub mod engine;

pub use bridge::{BodyParamsChanged, apply_parameter_changes};
pub use engine::{OrbitalClock, Spin, advance_frame, spin_star};

/// Plugin for orbital updates
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitalClock>()
            .add_message::<BodyParamsChanged>()
            .add_systems(
                Update,
                (
                    apply_parameter_changes,
                    advance_frame.after(apply_parameter_changes),
                    spin_star,
                ),
            );
    }
}
