//! Background soundtrack, started by the first click.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::config::SceneConfig;

/// Marker component for the looping soundtrack entity.
#[derive(Component)]
pub struct Soundtrack;

#[derive(Resource, Default, Debug)]
pub struct SoundtrackState {
    pub started: bool,
}

pub struct SoundtrackPlugin;

impl Plugin for SoundtrackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundtrackState>()
            .add_systems(Update, start_soundtrack_on_click);
    }
}

/// Whether a click should start playback now.
pub fn should_start(state: &SoundtrackState, config: &SceneConfig, clicked: bool) -> bool {
    clicked && config.audio.enabled && !state.started
}

fn start_soundtrack_on_click(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
    mut state: ResMut<SoundtrackState>,
) {
    if !should_start(&state, &config, mouse.just_pressed(MouseButton::Left)) {
        return;
    }
    state.started = true;

    // Playback failures (missing file, no output device) are reported by the
    // audio plugin and never reach the simulation.
    commands.spawn((
        AudioPlayer::new(asset_server.load(config.audio.path.clone())),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(config.audio.volume.clamp(0.0, 1.0))),
        Soundtrack,
        Name::new("Soundtrack"),
    ));
    info!("Soundtrack started: {}", config.audio.path);
}
