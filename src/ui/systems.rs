//! UI systems for the egui interface

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::BodyRegistry;
use crate::orbital::{BodyParamsChanged, OrbitalClock};
use crate::ui::panels::{render_bottom_panel, render_parameter_panel};
use crate::ui::state::UIState;

/// Renders the parameter panel and forwards edits to the bridge
pub fn ui_system(
    mut contexts: EguiContexts,
    mut state: ResMut<UIState>,
    mut registry: ResMut<BodyRegistry>,
    clock: Res<OrbitalClock>,
    mut changes: MessageWriter<BodyParamsChanged>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    ctx.input(|i| {
        for key in UIState::SHORTCUTS {
            if i.key_pressed(key) {
                state.toggle(key);
            }
        }
    });

    if state.show_bottom_panel {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            render_bottom_panel(ui, &state, &registry, &clock);
        });
    }

    let mut edited = Vec::new();
    if state.show_parameter_panel {
        egui::SidePanel::right("parameter_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                edited = render_parameter_panel(ui, &mut registry);
            });
    }

    for primary in edited {
        changes.write(BodyParamsChanged { primary });
    }
}
