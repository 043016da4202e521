//! Handles the state for the viewer.

use crate::draw;
use crate::input::{self, Action};

use simulator::random::RandomSource;
use simulator::{Sandbox, Setup};

use euclid::default::Size2D;
use ggez::event::{self, EventHandler, KeyCode, KeyMods, MouseButton};
use ggez::{
    graphics::{self, Color},
    input::keyboard,
    timer, Context, GameResult,
};
use log::{info, warn};
use std::time::{Duration, Instant};

/// The state of the viewer.
pub struct State {
    sandbox: Sandbox,
    /// Every scenario Tab cycles through. Never empty.
    scenarios: Vec<Setup>,
    /// Which of `scenarios` is loaded
    current: usize,
    /// When the current frame started
    frame_start: Instant,
}

impl State {
    /// `scenarios` must not be empty; the first one is loaded.
    pub fn new(ctx: &mut Context, scenarios: Vec<Setup>) -> Self {
        let (w, h) = graphics::drawable_size(ctx);
        let sandbox = Sandbox::new(
            scenarios[0].clone(),
            Size2D::new(w as f64, h as f64),
            RandomSource::from_entropy(),
        );
        State {
            sandbox,
            scenarios,
            current: 0,
            frame_start: Instant::now(),
        }
    }

    fn next_scenario(&mut self) {
        self.current = (self.current + 1) % self.scenarios.len();
        self.sandbox.load(self.scenarios[self.current].clone());
    }

    /// Fix the screen space to always have (0, 0) in the corner and (w, h) in the other.
    fn fix_coordinates(&mut self, ctx: &mut Context, width: f32, height: f32) -> GameResult<()> {
        let rect = graphics::Rect::new(0.0, 0.0, width, height);
        graphics::set_screen_coordinates(ctx, rect)
    }

    /// Sleep off whatever is left of this frame's budget.
    fn wait_for_frame(&mut self) {
        let spent = self.frame_start.elapsed();
        if spent < FRAME_BUDGET {
            timer::sleep(FRAME_BUDGET - spent);
        }
        self.frame_start = Instant::now();
    }
}

impl EventHandler for State {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        let mut dt = timer::duration_to_f64(timer::delta(ctx));
        if dt > MAX_DT {
            warn!("Frame took {:.3}s, only simulating {}s", dt, MAX_DT);
            dt = MAX_DT;
        }
        let controls = input::held_controls(|key| keyboard::is_key_pressed(ctx, key));
        self.sandbox.update(dt, controls);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        graphics::clear(ctx, Color::from_rgb(6, 8, 20));

        draw::world(ctx, &self.sandbox)?;
        draw::hud(ctx, &self.sandbox)?;
        draw::radar(ctx, &self.sandbox)?;

        graphics::present(ctx)?;
        self.wait_for_frame();
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if repeat {
            return;
        }
        match input::action_for_key(keycode) {
            Some(Action::Sandbox(command)) => self.sandbox.apply(command),
            Some(Action::NextScenario) => self.next_scenario(),
            Some(Action::Quit) => {
                info!("Quitting");
                event::quit(ctx);
            }
            None => {}
        }
    }

    fn mouse_button_down_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) {
        if let Some(command) = input::command_for_click(button, x, y) {
            self.sandbox.apply(command);
        }
    }

    fn resize_event(&mut self, ctx: &mut Context, width: f32, height: f32) {
        if let Err(e) = self.fix_coordinates(ctx, width, height) {
            warn!("Couldn't fix screen coordinates after resize: {}", e);
        }
        self.sandbox.resize(Size2D::new(width as f64, height as f64));
    }
}

const DESIRED_FPS: u64 = 60;
const FRAME_BUDGET: Duration = Duration::from_nanos(1_000_000_000 / DESIRED_FPS);
/// Longer frames than this are cut short so a stall doesn't fling the ship across the map.
const MAX_DT: f64 = 0.25;
