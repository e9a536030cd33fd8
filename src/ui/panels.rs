//! UI panel components and utilities
use bevy_egui::egui::{self, Color32};

use crate::bodies::{BodyRegistry, PrimaryBody};
use crate::orbital::OrbitalClock;
use crate::ui::state::UIState;

pub const DISTANCE_MAX: f32 = 1_000_000.0;
pub const DISTANCE_STEP: f64 = 10_000.0;
pub const SPEED_MAX: f32 = 100.0;
pub const SPEED_STEP: f64 = 0.00001;
pub const RADIUS_MAX: f32 = 10_000.0;
pub const RADIUS_STEP: f64 = 10.0;

/// One collapsible folder per primary with distance, speed and radius
/// controls. Returns the indices of primaries edited this frame.
pub fn render_parameter_panel(ui: &mut egui::Ui, registry: &mut BodyRegistry) -> Vec<usize> {
    let mut edited = Vec::new();

    ui.heading("Bodies");
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for (index, body) in registry.primaries.iter_mut().enumerate() {
                egui::CollapsingHeader::new(body.name.as_str())
                    .default_open(false)
                    .show(ui, |ui| {
                        if render_body_controls(ui, body) {
                            edited.push(index);
                        }
                    });
            }
        });

    edited
}

/// Distance slider plus numeric speed and radius fields for one primary.
/// Values are only stepped and clamped when the user edits them.
pub fn render_body_controls(ui: &mut egui::Ui, body: &mut PrimaryBody) -> bool {
    let mut changed = ui
        .add(
            egui::Slider::new(&mut body.distance, 0.0..=DISTANCE_MAX)
                .step_by(DISTANCE_STEP)
                .clamping(egui::SliderClamping::Edits)
                .text("Distance"),
        )
        .changed();
    ui.horizontal(|ui| {
        ui.label("Speed");
        changed |= ui
            .add(
                egui::DragValue::new(&mut body.speed)
                    .range(0.0..=SPEED_MAX)
                    .speed(SPEED_STEP)
                    .max_decimals(5),
            )
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("Radius");
        changed |= ui
            .add(
                egui::DragValue::new(&mut body.radius)
                    .range(0.0..=RADIUS_MAX)
                    .speed(RADIUS_STEP),
            )
            .changed();
    });
    changed
}

pub fn render_bottom_panel(
    ui: &mut egui::Ui,
    state: &UIState,
    registry: &BodyRegistry,
    clock: &OrbitalClock,
) {
    ui.horizontal(|ui| {
        ui.label(format!("Frame: {}", clock.frames));
        ui.separator();
        ui.label(format!(
            "Bodies: {} planets, {} satellites",
            registry.len(),
            registry.satellite_count()
        ));
        ui.separator();
        if state.show_parameter_panel {
            ui.label("H: hide panel");
        } else {
            ui.colored_label(Color32::GRAY, "H: show panel");
        }
        ui.label("L: hide this bar");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::solar_system;

    #[test]
    fn test_panel_without_input_edits_nothing() {
        let ctx = egui::Context::default();
        let mut registry = BodyRegistry::new(solar_system());
        let before = registry.clone();
        let mut edited = Vec::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                edited = render_parameter_panel(ui, &mut registry);
            });
        });

        assert!(edited.is_empty());
        assert_eq!(registry.primaries, before.primaries);
    }

    #[test]
    fn test_drawing_controls_leaves_values_alone() {
        let ctx = egui::Context::default();
        let mut bodies = solar_system();
        let before = bodies.clone();
        let mut changed = Vec::new();

        // Two passes: the first lays widgets out, the second redraws them.
        for _ in 0..2 {
            changed.clear();
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    for (index, body) in bodies.iter_mut().enumerate() {
                        ui.push_id(index, |ui| {
                            changed.push(render_body_controls(ui, body));
                        });
                    }
                });
            });
        }

        assert!(changed.iter().all(|c| !c));
        assert_eq!(bodies, before);
        // Off-grid catalog values survive: 4163 is not a multiple of the
        // distance step and 34.96 is not a multiple of the radius step.
        assert_eq!(bodies[0].distance, 4163.0);
        assert_eq!(bodies[0].radius, 34.96);
    }

    #[test]
    fn test_catalog_fits_panel_bounds() {
        for body in solar_system() {
            assert!(body.distance <= DISTANCE_MAX, "{}", body.name);
            assert!(body.speed <= SPEED_MAX, "{}", body.name);
            assert!(body.radius <= RADIUS_MAX, "{}", body.name);
        }
    }
}
