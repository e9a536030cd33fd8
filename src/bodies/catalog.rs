//! Static solar system catalog.
//!
//! Planet radii are scaled up 10x so they stay visible next to their orbits.
//! Speeds are radians per rendered frame, tuned against a display refresh
//! cadence rather than wall-clock time.

use std::f32::consts::TAU;

use super::types::{PrimaryBody, RING_SATELLITE_NAME, Satellite};

/// Frames for one Earth orbit.
pub const EARTH_ORBITAL_PERIOD: f32 = 3650.0;
/// Earth's angular speed in radians per frame.
pub const EARTH_ANGULAR_SPEED: f32 = TAU / EARTH_ORBITAL_PERIOD;

pub const SUN_TEXTURE: &str = "textures/sun.jpg";
pub const MOON_TEXTURE: &str = "textures/moon.jpg";
pub const RING_TEXTURE: &str = "textures/planet_rings.jpg";

fn texture_for(name: &str) -> String {
    format!("textures/{}.jpg", name.to_lowercase())
}

fn planet(name: &str, radius: f32, distance: f32, speed: f32) -> PrimaryBody {
    PrimaryBody::new(name, radius, distance, speed, texture_for(name))
}

/// The eight planets in order from the sun.
pub fn solar_system() -> Vec<PrimaryBody> {
    let w = EARTH_ANGULAR_SPEED;
    vec![
        planet("Mercury", 34.96, 4163.0, w * (365.0 / 87.97)),
        planet("Venus", 86.97, 7767.0, w * (365.0 / 224.7)),
        planet("Earth", 91.54, 10750.0, w)
            .with_satellite(Satellite::new("Moon", 0.3, 3.0, 24.0 * w)),
        planet("Mars", 48.57, 16370.0, w * (365.25 / 687.0))
            .with_satellite(Satellite::new("Phobos", 0.1, 2.0, 0.02))
            .with_satellite(Satellite::new("Deimos", 0.24, 3.0, 0.015)),
        planet("Jupiter", 1027.0, 55900.0, w * (365.25 / 4332.59)),
        planet("Saturn", 836.5, 102500.0, w * (365.25 / 10759.22))
            .with_satellite(Satellite::new(RING_SATELLITE_NAME, 0.1, 2.0, 0.02)),
        planet("Uranus", 337.2, 206200.0, w * (365.25 / 30688.5)),
        planet("Neptune", 326.4, 323300.0, w * (365.25 / 60182.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_eight_unique_planets() {
        let bodies = solar_system();
        assert_eq!(bodies.len(), 8);
        let names: HashSet<_> = bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names.len(), 8);
        assert_eq!(bodies[0].name, "Mercury");
        assert_eq!(bodies[7].name, "Neptune");
    }

    #[test]
    fn test_only_saturn_carries_the_ring() {
        let bodies = solar_system();
        for (i, body) in bodies.iter().enumerate() {
            let has_ring = body.satellites.iter().any(|s| s.is_decoration());
            assert_eq!(has_ring, i == 5, "unexpected ring state for {}", body.name);
        }
        assert_eq!(bodies[5].satellites.len(), 1);
    }

    #[test]
    fn test_orbits_grow_outward_and_slow_down() {
        let bodies = solar_system();
        for pair in bodies.windows(2) {
            assert!(pair[0].distance < pair[1].distance);
            assert!(pair[0].speed > pair[1].speed);
        }
        assert!((bodies[2].speed - EARTH_ANGULAR_SPEED).abs() < 1e-9);
    }

    #[test]
    fn test_textures_follow_names() {
        let bodies = solar_system();
        assert_eq!(bodies[2].texture, "textures/earth.jpg");
        assert_eq!(bodies[3].texture, "textures/mars.jpg");
    }
}
