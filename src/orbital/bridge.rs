//! Applies parameter panel edits to the scene.
//!
//! Every edit refreshes all primaries, not just the edited one: scale is
//! re-derived from `radius` and each primary is advanced one extra tick
//! through the same [`advance_primary`] the frame loop uses. Satellites are
//! left alone.

use bevy::prelude::*;

use crate::bodies::{BodyRegistry, PrimaryBody};
use crate::orbital::engine::{Spin, advance_primary};
use crate::scene::SceneProxies;

/// Emitted by the panel whenever a primary's distance, speed or radius changes.
#[derive(Message, Clone, Copy, Debug)]
pub struct BodyParamsChanged {
    pub primary: usize,
}

/// Scale a primary to its radius and advance it once.
pub fn refresh_primary(body: &PrimaryBody, transform: &mut Transform, spin: &mut Spin) {
    transform.scale = Vec3::splat(body.radius);
    advance_primary(body, transform, spin);
}

pub fn apply_parameter_changes(
    mut changes: MessageReader<BodyParamsChanged>,
    registry: Res<BodyRegistry>,
    proxies: Option<Res<SceneProxies>>,
    mut query: Query<(&mut Transform, &mut Spin)>,
) {
    let Some(proxies) = proxies else {
        changes.clear();
        return;
    };

    for change in changes.read() {
        if let Some(body) = registry.primaries.get(change.primary) {
            debug!(
                "{} edited: distance={} speed={} radius={}",
                body.name, body.distance, body.speed, body.radius
            );
        }
        for (body, proxy) in registry.primaries.iter().zip(&proxies.primaries) {
            if let Ok((mut transform, mut spin)) = query.get_mut(proxy.entity) {
                refresh_primary(body, &mut transform, &mut spin);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    use crate::bodies::Satellite;
    use crate::scene::PrimaryProxy;

    const EPS: f32 = 1e-4;

    struct Fixture {
        app: App,
        primaries: Vec<Entity>,
        moon: Entity,
    }

    fn fixture() -> Fixture {
        let mut app = App::new();
        app.add_message::<BodyParamsChanged>()
            .insert_resource(BodyRegistry::new(vec![
                PrimaryBody::new("A", 2.0, 100.0, 0.1, "a.jpg")
                    .with_satellite(Satellite::new("a1", 0.5, 3.0, 0.4)),
                PrimaryBody::new("B", 4.0, 200.0, 0.2, "b.jpg"),
                PrimaryBody::new("C", 6.0, 300.0, 0.3, "c.jpg"),
            ]))
            .add_systems(Update, apply_parameter_changes);

        let moon = app
            .world_mut()
            .spawn((Transform::from_xyz(1.0, 0.0, 0.0), Spin::default()))
            .id();
        let mut table = SceneProxies::default();
        let mut primaries = Vec::new();
        for i in 0..3 {
            let entity = app.world_mut().spawn((Transform::default(), Spin::default())).id();
            primaries.push(entity);
            table.primaries.push(PrimaryProxy {
                entity,
                satellites: if i == 0 { vec![moon] } else { Vec::new() },
            });
        }
        app.insert_resource(table);
        Fixture {
            app,
            primaries,
            moon,
        }
    }

    fn send(app: &mut App, primary: usize) {
        app.world_mut()
            .resource_mut::<Messages<BodyParamsChanged>>()
            .write(BodyParamsChanged { primary });
    }

    #[test]
    fn test_edit_refreshes_every_primary() {
        let mut f = fixture();
        f.app.world_mut().resource_mut::<BodyRegistry>().primaries[1].radius = 9.0;
        send(&mut f.app, 1);
        f.app.update();

        let expected = [(2.0, 100.0, 0.1), (9.0, 200.0, 0.2), (6.0, 300.0, 0.3)];
        for (&entity, (radius, distance, speed)) in f.primaries.iter().zip(expected) {
            let transform = f.app.world().get::<Transform>(entity).unwrap();
            let spin = f.app.world().get::<Spin>(entity).unwrap();
            assert_eq!(transform.scale, Vec3::splat(radius));
            assert!((transform.translation.z - distance).abs() < EPS);
            assert!((spin.angle - speed).abs() < 1e-6);
        }
    }

    #[test]
    fn test_edits_never_touch_satellites() {
        let mut f = fixture();
        let before = *f.app.world().get::<Transform>(f.moon).unwrap();
        send(&mut f.app, 0);
        send(&mut f.app, 0);
        f.app.update();
        assert_eq!(*f.app.world().get::<Transform>(f.moon).unwrap(), before);
        assert_eq!(f.app.world().get::<Spin>(f.moon).unwrap().angle, 0.0);
    }

    #[test]
    fn test_each_edit_adds_one_tick() {
        let mut f = fixture();
        for _ in 0..3 {
            send(&mut f.app, 2);
        }
        f.app.update();
        let spin = f.app.world().get::<Spin>(f.primaries[0]).unwrap();
        assert!((spin.angle - 0.3).abs() < 1e-5);

        // No messages, no movement.
        f.app.update();
        let spin = f.app.world().get::<Spin>(f.primaries[0]).unwrap();
        assert!((spin.angle - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_refresh_uses_current_distance() {
        let body = PrimaryBody::new("X", 3.0, 500.0, 0.0, "x.jpg");
        let mut transform = Transform::default();
        let mut spin = Spin::default();
        spin.angle = std::f32::consts::FRAC_PI_2;
        refresh_primary(&body, &mut transform, &mut spin);
        assert!((transform.translation.x - 500.0).abs() < 1e-2);
        assert!(transform.translation.z.abs() < 1e-2);
        assert_eq!(transform.scale, Vec3::splat(3.0));
    }
}
