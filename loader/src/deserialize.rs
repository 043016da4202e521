//! Lets you load a Setup from JSON5.

use serde::Deserialize;

/// A Vector2D or Point2D.
#[derive(Deserialize)]
struct Vec2D(f64, f64);

/// How space behaves.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum Mode {
    Orbital,
    Drift {
        width: f64,
        height: f64,
        #[serde(default = "default_friction")]
        friction: f64,
    },
}

/// Returns the friction a drift arena has if you don't say.
fn default_friction() -> f64 {
    0.99
}

fn full_tank() -> f64 {
    simulator::bodies::MAX_FUEL
}

#[derive(Deserialize)]
struct Ship {
    pos: Vec2D,
    #[serde(default = "zero_vec")]
    vel: Vec2D,
    /// In degrees, because nobody writes radians by hand
    #[serde(default)]
    angle: f64,
    thrust: f64,
    rotation_rate: f64,
    burn_rate: f64,
    #[serde(default = "full_tank")]
    fuel: f64,
}

fn zero_vec() -> Vec2D {
    Vec2D(0.0, 0.0)
}

/// A planet and where it goes
#[derive(Deserialize)]
struct Planet {
    pos: Vec2D,
    body: Body,
}

/// What a planet is made of
#[derive(Deserialize)]
#[serde(untagged)]
enum Body {
    Prefab(String), // A pre-made planet
    Custom {
        mass: f64,
        /// Worked out from the mass if it's missing
        #[serde(default)]
        radius: Option<f64>,
        color: u32,
    },
}

#[derive(Deserialize)]
struct RawSetup {
    name: String,
    mode: Mode,
    #[serde(default = "zero_vec")]
    camera: Vec2D,
    ship: Ship,
    #[serde(default)]
    planets: Vec<Planet>,
}

use crate::prefabs;
use anyhow::{anyhow, ensure, Context};
use euclid::default::{Point2D, Size2D, Vector2D};
use simulator::bodies::{self, MAX_FUEL};
use simulator::physics::Policy;
use simulator::spawn::radius_for_mass;
use simulator::Setup;

/// Reads JSON5 and returns the ingredients for a Sandbox.
pub fn load(contents: &str) -> anyhow::Result<Setup> {
    let raw: RawSetup = json5::from_str(contents).context("couldn't parse scenario")?;
    let name = raw.name;

    let policy = match raw.mode {
        Mode::Orbital => Policy::Orbital,
        Mode::Drift {
            width,
            height,
            friction,
        } => {
            ensure!(
                width > 0.0 && height > 0.0,
                "{}: drift arena must have a positive size, not {}x{}",
                name,
                width,
                height
            );
            ensure!(
                friction > 0.0 && friction <= 1.0,
                "{}: friction must be in (0, 1], not {}",
                name,
                friction
            );
            Policy::Drift {
                bounds: Size2D::new(width, height),
                friction,
            }
        }
    };

    let ship = convert_ship(raw.ship).with_context(|| format!("{}: bad ship", name))?;
    let planets = raw
        .planets
        .into_iter()
        .enumerate()
        .map(|(idx, planet)| {
            convert_planet(planet).with_context(|| format!("{}: bad planet #{}", name, idx))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Setup {
        name,
        policy,
        ship,
        planets,
        camera: Point2D::new(raw.camera.0, raw.camera.1),
    })
}

fn convert_ship(ship: Ship) -> anyhow::Result<bodies::Ship> {
    ensure!(
        ship.fuel >= 0.0 && ship.fuel <= MAX_FUEL,
        "fuel must be between 0 and {}, not {}",
        MAX_FUEL,
        ship.fuel
    );
    ensure!(ship.burn_rate >= 0.0, "burn rate can't be negative");
    ensure!(ship.thrust >= 0.0, "thrust can't be negative");

    let mut out = bodies::Ship::new(
        Point2D::new(ship.pos.0, ship.pos.1),
        Vector2D::new(ship.vel.0, ship.vel.1),
        ship.angle.to_radians(),
    );
    out.thrust = ship.thrust;
    out.rotation_rate = ship.rotation_rate;
    out.burn_rate = ship.burn_rate;
    out.fuel = ship.fuel;
    Ok(out)
}

fn convert_planet(planet: Planet) -> anyhow::Result<bodies::Planet> {
    let pos = Point2D::new(planet.pos.0, planet.pos.1);
    match planet.body {
        Body::Prefab(id) => {
            let make = prefabs::get(&id).ok_or_else(|| anyhow!("no prefab planet named {}", id))?;
            Ok(make(pos))
        }
        Body::Custom {
            mass,
            radius,
            color,
        } => {
            ensure!(mass > 0.0, "mass must be positive, not {}", mass);
            let radius = radius.unwrap_or_else(|| radius_for_mass(mass));
            ensure!(radius > 0.0, "radius must be positive, not {}", radius);
            ensure!(color <= 0xffffff, "color {:#x} isn't 0xRRGGBB", color);
            Ok(bodies::Planet::new(pos, mass, radius, color))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_planets_get_a_radius() {
        let setup = load(
            r#"{
                name: "t",
                mode: "orbital",
                ship: { pos: [0, 0], thrust: 1, rotation_rate: 1, burn_rate: 1 },
                planets: [ { pos: [1, 2], body: { mass: 2500, color: 0x112233 } } ],
            }"#,
        )
        .unwrap();
        assert_eq!(setup.planets[0].radius, 40.0);
        assert_eq!(setup.planets[0].color, 0x112233);
        assert_eq!(setup.planets[0].pos, Point2D::new(1.0, 2.0));
    }

    #[test]
    fn defaults_fill_in() {
        let setup = load(
            r#"{
                name: "t",
                mode: { drift: { width: 10, height: 20 } },
                ship: { pos: [3, 4], thrust: 1, rotation_rate: 1, burn_rate: 0 },
            }"#,
        )
        .unwrap();
        assert_eq!(setup.camera, Point2D::zero());
        assert_eq!(setup.ship.vel, Vector2D::zero());
        assert_eq!(setup.ship.fuel, MAX_FUEL);
        assert!(setup.planets.is_empty());
        assert_eq!(
            setup.policy,
            Policy::Drift {
                bounds: Size2D::new(10.0, 20.0),
                friction: 0.99
            }
        );
    }
}
