use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;
#[cfg(feature = "dev_camera")]
use bevy_camera_controller::free_camera::{FreeCamera, FreeCameraPlugin};

mod audio;
mod bodies;
mod config;
mod orbital;
mod scene;
mod ui;

use audio::SoundtrackPlugin;
use bodies::BodiesPlugin;
use config::{ConfigPlugin, SceneConfig};
use orbital::OrbitalPlugin;
use scene::{MainCamera, ScenePlugin, SkyboxPlugin};
use ui::UiPlugin;

#[cfg(feature = "dev_camera")]
#[derive(Component)]
struct DevCamera;

// Setup lights and the orbit camera
pub fn setup(mut commands: Commands, config: Res<SceneConfig>) {
    // Keep the night side of each planet faintly visible.
    commands.insert_resource(GlobalAmbientLight {
        brightness: config.lighting.ambient_brightness,
        ..default()
    });

    // Point light inside the sun. The sun mesh is unlit and casts no shadow.
    commands.spawn((
        PointLight {
            intensity: config.lighting.sun_intensity,
            range: config.lighting.sun_range,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 1.0, 0.0),
        Name::new("Sun Light"),
    ));

    let cam = &config.camera;
    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        zoom_lower_limit: cam.min_distance,
        zoom_upper_limit: Some(cam.max_distance),
        orbit_smoothness: cam.smoothness,
        pan_smoothness: cam.smoothness,
        zoom_smoothness: cam.smoothness,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: cam.fov_deg.to_radians(),
            // Neptune orbits at ~323,000 units; the default far plane clips it.
            near: cam.near,
            far: cam.far,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(Vec3::from_array(cam.initial_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

#[cfg(feature = "dev_camera")]
fn setup_dev_camera(mut commands: Commands, config: Res<SceneConfig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: config.camera.near,
            far: config.camera.far,
            ..default()
        }),
        Camera {
            order: 2,
            is_active: false,
            ..default()
        },
        FreeCamera::default(),
        DevCamera,
    ));
}

#[cfg(feature = "dev_camera")]
fn toggle_dev_camera(
    input: Res<ButtonInput<KeyCode>>,
    mut main_camera: Query<&mut Camera, (With<MainCamera>, Without<DevCamera>)>,
    mut dev_camera: Query<&mut Camera, With<DevCamera>>,
) {
    if !input.just_pressed(KeyCode::F2) {
        return;
    }

    if let Ok(mut main) = main_camera.single_mut()
        && let Ok(mut dev) = dev_camera.single_mut()
    {
        let dev_active = dev.is_active;
        dev.is_active = !dev_active;
        main.is_active = dev_active;
    }
}

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Bevy Solar System".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Config first: later plugins read it at startup.
    app.add_plugins(ConfigPlugin);

    app.add_plugins(EguiPlugin::default());
    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(BodiesPlugin);
    app.add_plugins(ScenePlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(SkyboxPlugin);
    app.add_plugins(UiPlugin);
    app.add_plugins(SoundtrackPlugin);
    app.add_systems(Startup, setup);

    #[cfg(feature = "dev_camera")]
    {
        app.add_plugins(FreeCameraPlugin);
        app.add_systems(Startup, setup_dev_camera);
        app.add_systems(Update, toggle_dev_camera);
    }

    app.run();
}
