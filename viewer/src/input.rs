//! Which keys and buttons do what.

use euclid::default::Point2D;
use ggez::event::{KeyCode, MouseButton};
use simulator::physics::Controls;
use simulator::Command;

/// Something a single key press asks for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    Sandbox(Command),
    /// Swap to the next built-in scenario
    NextScenario,
    Quit,
}

/// Keys that act once per press.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Escape => Action::Quit,
        KeyCode::Space => Action::Sandbox(Command::TogglePause),
        KeyCode::R => Action::Sandbox(Command::Reset),
        KeyCode::Equals | KeyCode::Add => Action::Sandbox(Command::ZoomIn),
        KeyCode::Minus | KeyCode::Subtract => Action::Sandbox(Command::ZoomOut),
        KeyCode::Tab => Action::NextScenario,
        _ => return None,
    };
    Some(action)
}

/// Left click makes a planet, right click removes one.
pub fn command_for_click(button: MouseButton, x: f32, y: f32) -> Option<Command> {
    let at = Point2D::new(x as f64, y as f64);
    match button {
        MouseButton::Left => Some(Command::Spawn(at)),
        MouseButton::Right => Some(Command::Despawn(at)),
        _ => None,
    }
}

/// Keys that act for as long as they're held.
pub fn held_controls(is_down: impl Fn(KeyCode) -> bool) -> Controls {
    Controls {
        rotate_left: is_down(KeyCode::A) || is_down(KeyCode::Left),
        rotate_right: is_down(KeyCode::D) || is_down(KeyCode::Right),
        thrust_forward: is_down(KeyCode::W) || is_down(KeyCode::Up),
        thrust_reverse: is_down(KeyCode::S) || is_down(KeyCode::Down),
    }
}
