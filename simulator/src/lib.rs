//! Handles the simulation of the sandbox

pub mod bodies;
pub mod camera;
pub mod physics;
pub mod radar;
pub mod random;
pub mod spawn;
pub mod starfield;
pub mod trail;

use crate::bodies::{Planet, Ship};
use crate::camera::Camera;
use crate::physics::{Controls, Policy};
use crate::random::RandomSource;
use crate::starfield::{Starfield, STAR_COUNT};
use crate::trail::Trail;
use euclid::default::{Point2D, Size2D};
use log::{debug, info};

pub use physics::GRAV_CONSTANT;

/// Everything needed to (re)start a sandbox.
#[derive(Clone, Debug)]
pub struct Setup {
    pub name: String,
    pub policy: Policy,
    pub ship: Ship,
    pub planets: Vec<Planet>,
    /// Where the camera starts looking
    pub camera: Point2D<f64>,
}

/// What the sandbox is up to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimulationMode {
    Running,
    /// Nothing moves, but we still draw.
    Paused,
}

/// One-off things the player can ask for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    TogglePause,
    Reset,
    ZoomIn,
    ZoomOut,
    /// Put a new planet under this screen point
    Spawn(Point2D<f64>),
    /// Remove the planet nearest this screen point, if it's close
    Despawn(Point2D<f64>),
}

pub struct Sandbox {
    setup: Setup,
    ship: Ship,
    planets: Vec<Planet>,
    camera: Camera,
    trail: Trail,
    /// Generated once when the sandbox is made. Resets and scenario swaps leave it alone.
    starfield: Starfield,
    random: RandomSource,
    mode: SimulationMode,
    /// Seconds simulated since the last reset
    sim_time: f64,
}

impl Sandbox {
    pub fn new(setup: Setup, viewport: Size2D<f64>, mut random: RandomSource) -> Self {
        let starfield = Starfield::generate(&mut random, STAR_COUNT);
        let mut sandbox = Sandbox {
            ship: setup.ship,
            planets: setup.planets.clone(),
            camera: Camera::new(setup.camera, viewport),
            trail: Trail::default(),
            starfield,
            random,
            mode: SimulationMode::Running,
            sim_time: 0.0,
            setup,
        };
        sandbox.reset();
        sandbox
    }

    /// Advance everything by `dt` seconds.
    /// Paused sandboxes and non-positive `dt`s don't change anything.
    pub fn update(&mut self, dt: f64, controls: Controls) {
        match self.mode {
            SimulationMode::Running => {
                if !(dt > 0.0) {
                    return;
                }
                physics::step(
                    &mut self.ship,
                    &self.planets,
                    controls,
                    self.setup.policy,
                    dt,
                );
                self.trail.push(self.ship.pos);
                let target = match self.setup.policy {
                    Policy::Orbital => self.ship.pos,
                    // The arena doesn't scroll
                    Policy::Drift { .. } => self.setup.camera,
                };
                self.camera.follow(target);
                self.sim_time += dt;
            }
            SimulationMode::Paused => {
                // Frozen
            }
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => self.reset(),
            Command::ZoomIn => self.camera.zoom_in(),
            Command::ZoomOut => self.camera.zoom_out(),
            Command::Spawn(screen) => {
                self.spawn_planet(screen);
            }
            Command::Despawn(screen) => {
                self.despawn_planet(screen);
            }
        }
    }

    /// Put everything except the mode and the stars back how it started.
    pub fn reset(&mut self) {
        self.ship = self.setup.ship;
        self.planets = self.setup.planets.clone();
        self.camera.reset(self.setup.camera);
        self.trail.clear();
        self.sim_time = 0.0;
        info!(
            "Reset \"{}\" with {} planets",
            self.setup.name,
            self.planets.len()
        );
    }

    /// Swap to a different setup and start it fresh. Keeps the mode.
    pub fn load(&mut self, setup: Setup) {
        info!("Switching to \"{}\"", setup.name);
        self.setup = setup;
        self.reset();
    }

    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            SimulationMode::Running => SimulationMode::Paused,
            SimulationMode::Paused => SimulationMode::Running,
        };
        info!("Now {:?}", self.mode);
    }

    /// Make a random planet under a screen point.
    /// Returns whether anything was spawned.
    pub fn spawn_planet(&mut self, screen: Point2D<f64>) -> bool {
        if !self.setup.policy.has_gravity() {
            debug!("No planets in {:?} space", self.setup.policy);
            return false;
        }
        let world = self.camera.screen_to_world(screen);
        let planet = spawn::random_planet(&mut self.random, world);
        debug!(
            "Spawned planet of mass {:.0} radius {} at ({:.1}, {:.1})",
            planet.mass, planet.radius, world.x, world.y
        );
        self.planets.push(planet);
        true
    }

    /// Remove the planet nearest a screen point if it's close enough.
    /// Returns whether anything was removed.
    pub fn despawn_planet(&mut self, screen: Point2D<f64>) -> bool {
        if !self.setup.policy.has_gravity() {
            return false;
        }
        let world = self.camera.screen_to_world(screen);
        match spawn::remove_near(&mut self.planets, world) {
            Some(planet) => {
                debug!(
                    "Removed planet at ({:.1}, {:.1})",
                    planet.pos.x, planet.pos.y
                );
                true
            }
            None => false,
        }
    }

    pub fn resize(&mut self, viewport: Size2D<f64>) {
        self.camera.set_viewport(viewport);
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    pub fn policy(&self) -> Policy {
        self.setup.policy
    }

    pub fn name(&self) -> &str {
        &self.setup.name
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }
}
