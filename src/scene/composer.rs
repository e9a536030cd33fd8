//! Builds the initial scene hierarchy from the body registry.

use bevy::prelude::*;

use crate::bodies::{BodyRegistry, MOON_TEXTURE, RING_TEXTURE, SUN_TEXTURE};
use crate::config::SceneConfig;
use crate::orbital::Spin;
use crate::scene::mesh_factory::{
    ProxyBlueprint, ProxyGeometry, primary_proxy, satellite_proxy, unit_sphere_mesh,
};

/// Marker component for the central star.
#[derive(Component)]
pub struct Star;

/// Entities spawned for one primary, in registry order.
#[derive(Clone, Debug)]
pub struct PrimaryProxy {
    pub entity: Entity,
    pub satellites: Vec<Entity>,
}

/// Proxy table parallel to [`BodyRegistry::primaries`].
#[derive(Resource, Clone, Debug, Default)]
pub struct SceneProxies {
    pub star: Option<Entity>,
    pub primaries: Vec<PrimaryProxy>,
}

/// Mesh and material handles shared by the proxies.
#[derive(Resource, Clone, Default)]
pub struct SceneAssets {
    pub sphere: Handle<Mesh>,
    pub sun: Handle<StandardMaterial>,
    pub moon: Handle<StandardMaterial>,
    pub rings: Handle<StandardMaterial>,
    /// One surface material per primary, in registry order.
    pub surfaces: Vec<Handle<StandardMaterial>>,
}

pub fn load_scene_assets(
    mut commands: Commands,
    registry: Res<BodyRegistry>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let mut textured = |path: &str| {
        materials.add(StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: Some(asset_server.load(path.to_owned())),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })
    };

    let moon = textured(MOON_TEXTURE);
    let surfaces = registry
        .primaries
        .iter()
        .map(|body| textured(&body.texture))
        .collect();

    let sun = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(SUN_TEXTURE)),
        unlit: true,
        ..default()
    });
    // The camera can pass beneath the ring, so render both faces.
    let rings = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(RING_TEXTURE)),
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands.insert_resource(SceneAssets {
        sphere: meshes.add(unit_sphere_mesh()),
        sun,
        moon,
        rings,
        surfaces,
    });
}

fn spawn_proxy(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    assets: &SceneAssets,
    blueprint: ProxyBlueprint,
    sphere_material: Handle<StandardMaterial>,
    name: &str,
) -> Entity {
    let (mesh, material) = match blueprint.geometry {
        ProxyGeometry::UnitSphere => (assets.sphere.clone(), sphere_material),
        ProxyGeometry::Ring(ring) => (meshes.add(ring.mesh()), assets.rings.clone()),
    };
    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            blueprint.transform,
            blueprint.spin,
            Name::new(name.to_owned()),
        ))
        .id()
}

/// Spawn the star plus one proxy per body. Satellites are parented to their
/// primary, so their transforms live in the primary's local frame.
pub fn compose(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    assets: &SceneAssets,
    registry: &BodyRegistry,
    config: &SceneConfig,
) -> SceneProxies {
    let star = commands
        .spawn((
            Mesh3d(assets.sphere.clone()),
            MeshMaterial3d(assets.sun.clone()),
            Transform::from_scale(Vec3::splat(config.star.scale)),
            Spin::default(),
            Star,
            Name::new("Sun"),
        ))
        .id();

    let primaries = registry
        .primaries
        .iter()
        .enumerate()
        .map(|(index, body)| {
            let surface = assets.surfaces.get(index).cloned().unwrap_or_default();
            let entity = spawn_proxy(
                commands,
                meshes,
                assets,
                primary_proxy(body),
                surface,
                &body.name,
            );
            let satellites = body
                .satellites
                .iter()
                .map(|satellite| {
                    let child = spawn_proxy(
                        commands,
                        meshes,
                        assets,
                        satellite_proxy(satellite),
                        assets.moon.clone(),
                        &satellite.name,
                    );
                    commands.entity(child).insert(ChildOf(entity));
                    child
                })
                .collect();
            PrimaryProxy { entity, satellites }
        })
        .collect();

    SceneProxies {
        star: Some(star),
        primaries,
    }
}

pub fn compose_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    assets: Res<SceneAssets>,
    registry: Res<BodyRegistry>,
    config: Res<SceneConfig>,
) {
    let proxies = compose(&mut commands, &mut meshes, &assets, &registry, &config);
    info!(
        "Scene composed: {} primaries, {} satellites",
        proxies.primaries.len(),
        proxies
            .primaries
            .iter()
            .map(|p| p.satellites.len())
            .sum::<usize>()
    );
    commands.insert_resource(proxies);
}
