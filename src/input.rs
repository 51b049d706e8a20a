//! Per-frame keyboard and mouse state aggregated from the SDL event pump.

use std::collections::HashSet;

use glam::Vec2;
use sdl2::{keyboard::Keycode, mouse::MouseButton};

use crate::camera::FlyInput;

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
}

impl KeyboardState {
    /// Clears the edge-triggered set at the start of a frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }
}

/// The current state of the mouse.
#[derive(Default)]
pub struct MouseState {
    pub delta: Vec2,
    pub down: HashSet<MouseButton>,
    pub scroll_delta: Vec2,
}

impl MouseState {
    /// Clears the per-frame deltas.
    pub fn begin_frame(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }
}

/// Maps the held movement keys (W/A/S/D and Q/E) onto the camera fly axes.
pub fn fly_input(keyboard: &KeyboardState) -> FlyInput {
    let axis = |positive: Keycode, negative: Keycode| {
        let mut value = 0.0;
        if keyboard.down.contains(&positive) {
            value += 1.0;
        }
        if keyboard.down.contains(&negative) {
            value -= 1.0;
        }
        value
    };

    FlyInput {
        forward: axis(Keycode::W, Keycode::S),
        strafe: axis(Keycode::D, Keycode::A),
        lift: axis(Keycode::Q, Keycode::E),
    }
}
