//! Routes `winit` window events into a [`CameraController`].

use log::{debug, info};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::{CameraController, MovementKey};

/// Pixels of trackpad scroll that count as one wheel line.
pub const PIXELS_PER_LINE: f32 = 10.0;

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl EventResponse {
    fn ignored() -> Self {
        Self {
            repaint: false,
            exit: false,
        }
    }

    fn repaint() -> Self {
        Self {
            repaint: true,
            exit: false,
        }
    }
}

pub fn movement_key(code: KeyCode) -> Option<MovementKey> {
    match code {
        KeyCode::KeyW => Some(MovementKey::Forward),
        KeyCode::KeyS => Some(MovementKey::Backward),
        KeyCode::KeyA => Some(MovementKey::Left),
        KeyCode::KeyD => Some(MovementKey::Right),
        KeyCode::Space => Some(MovementKey::Up),
        KeyCode::ShiftLeft => Some(MovementKey::Down),
        _ => None,
    }
}

/// Vertical scroll in wheel lines, positive away from the user.
pub fn scroll_lines(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
    }
}

pub fn handle_window_event(
    controller: &mut CameraController,
    event: &WindowEvent,
) -> EventResponse {
    match event {
        WindowEvent::CloseRequested => EventResponse {
            repaint: false,
            exit: true,
        },
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(code) = event.physical_key else {
                return EventResponse::ignored();
            };
            let pressed = event.state == ElementState::Pressed;
            handle_key(controller, code, pressed, event.repeat)
        }
        WindowEvent::CursorMoved { position, .. } => {
            controller.on_pointer_move(position.x, position.y);
            EventResponse::repaint()
        }
        WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
            debug!("pointer lost, reseeding tracking");
            controller.on_pointer_lost();
            EventResponse::ignored()
        }
        WindowEvent::MouseWheel { delta, .. } => {
            controller.on_scroll(scroll_lines(delta));
            EventResponse::repaint()
        }
        _ => EventResponse::ignored(),
    }
}

pub fn handle_key(
    controller: &mut CameraController,
    code: KeyCode,
    pressed: bool,
    repeat: bool,
) -> EventResponse {
    match code {
        KeyCode::Escape if pressed => EventResponse {
            repaint: false,
            exit: true,
        },
        KeyCode::KeyR if pressed && !repeat => {
            info!("camera reset");
            controller.reset();
            EventResponse::repaint()
        }
        _ => match movement_key(code) {
            Some(key) => {
                controller.on_key(key, pressed);
                EventResponse::repaint()
            }
            None => EventResponse::ignored(),
        },
    }
}
