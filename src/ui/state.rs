//! UI state management

use bevy::prelude::*;
use bevy_egui::egui;

/// Main UI state resource
#[derive(Resource, Debug, PartialEq)]
pub struct UIState {
    pub show_parameter_panel: bool,
    pub show_bottom_panel: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            show_parameter_panel: true,
            show_bottom_panel: true,
        }
    }
}

impl UIState {
    /// Panel toggles: H for the parameter panel, L for the status bar.
    pub const SHORTCUTS: [egui::Key; 2] = [egui::Key::H, egui::Key::L];

    pub fn toggle(&mut self, key: egui::Key) {
        match key {
            egui::Key::H => self.show_parameter_panel = !self.show_parameter_panel,
            egui::Key::L => self.show_bottom_panel = !self.show_bottom_panel,
            _ => {}
        }
    }
}
