//! User interface module
//!
//! This module handles UI state and the egui parameter panel bound to each
//! planet's orbital parameters.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub mod panels;
pub mod state;
pub mod systems;

pub use state::UIState;
pub use systems::ui_system;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UIState>()
            .add_systems(EguiPrimaryContextPass, ui_system);
    }
}
