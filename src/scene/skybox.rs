use bevy::core_pipeline::Skybox;
use bevy::prelude::Plugin;
use bevy::{
    asset::LoadState,
    prelude::*,
    render::render_resource::{TextureViewDescriptor, TextureViewDimension},
};

use crate::config::SceneConfig;
use crate::scene::MainCamera;

pub struct SkyboxPlugin;

impl Plugin for SkyboxPlugin {
    fn build(&self, app: &mut bevy::prelude::App) {
        app.add_systems(Startup, request_cubemap)
            .add_systems(Update, asset_loaded);
    }
}

#[derive(Resource)]
pub struct Cubemap {
    pub activated: bool,
    pub is_loaded: bool,
    pub image_handle: Handle<Image>,
    pub brightness: f32,
}

fn request_cubemap(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    commands.insert_resource(Cubemap {
        activated: config.skybox.enabled,
        is_loaded: false,
        image_handle: asset_server.load(config.skybox.path.clone()),
        brightness: config.skybox.brightness,
    });
}

fn asset_loaded(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    cubemap: Option<ResMut<Cubemap>>,
    mut camera_query: Query<(Entity, Option<&Skybox>), With<MainCamera>>,
) {
    let Some(mut cubemap) = cubemap else {
        return;
    };

    if cubemap.activated
        && !cubemap.is_loaded
        && asset_server
            .get_load_state(cubemap.image_handle.id())
            .unwrap_or(LoadState::NotLoaded)
            .is_loaded()
    {
        let Some(mut image) = images.get_mut(&cubemap.image_handle) else {
            return;
        };
        // NOTE: PNGs do not have any metadata that could indicate they contain a cubemap texture,
        // so they appear as one texture. The following code reconfigures the texture as necessary.
        if image.texture_descriptor.array_layer_count() == 1 {
            if let Err(err) = image.reinterpret_stacked_2d_as_array(image.height() / image.width())
            {
                warn!("Failed to reinterpret skybox image as cubemap: {}", err);
                cubemap.activated = false;
                return;
            }
            image.texture_view_descriptor = Some(TextureViewDescriptor {
                dimension: Some(TextureViewDimension::Cube),
                ..default()
            });
        }

        info!("Skybox ready");
        cubemap.is_loaded = true;
    }

    if cubemap.activated && cubemap.is_loaded {
        if let Ok((camera_entity, skybox)) = camera_query.single_mut() {
            if skybox.is_none() {
                commands.entity(camera_entity).insert(Skybox {
                    image: cubemap.image_handle.clone(),
                    brightness: cubemap.brightness,
                    ..default()
                });
            }
        }
    }
}
