//! Scene module
//!
//! Turns the body registry into renderable proxies: mesh blueprints, the
//! parented entity hierarchy, and the skybox.

use bevy::prelude::*;

pub mod composer;
pub mod mesh_factory;
pub mod skybox;

pub use composer::{
    PrimaryProxy, SceneAssets, SceneProxies, Star, compose, compose_scene, load_scene_assets,
};
pub use skybox::SkyboxPlugin;

/// Marker component for the main orbit camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin that builds the solar system scene at startup
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (load_scene_assets, compose_scene.after(load_scene_assets)),
        );
    }
}
