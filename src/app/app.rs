use std::sync::Arc;

use log::debug;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::app::clock::FrameClock;
use flycam::camera::{CameraController, CameraState, CameraUniform};
use flycam::input::{self, EventResponse};
use flycam::settings::{Settings, WindowSettings};

pub struct App {
    pub window: Arc<Window>,
    camera_controller: CameraController,
    window_settings: WindowSettings,
    clock: FrameClock,
    aspect: f32,
}

impl App {
    pub fn new(window: Arc<Window>, settings: &Settings, lock_to_horizontal_plane: bool) -> Self {
        let mut camera_controller =
            CameraController::new(CameraState::default(), (&settings.camera).into());
        if lock_to_horizontal_plane {
            camera_controller.set_lock_to_horizontal_plane(true);
        }

        let size = window.inner_size();
        Self {
            window,
            camera_controller,
            window_settings: settings.window.clone(),
            clock: FrameClock::new(),
            aspect: aspect_ratio(size.width, size.height),
        }
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        if let WindowEvent::Resized(size) = event {
            self.aspect = aspect_ratio(size.width, size.height);
        }
        input::handle_window_event(&mut self.camera_controller, event)
    }

    /// Advance the camera one frame and produce the matrices for the shading stage
    pub fn frame(&mut self) -> CameraUniform {
        let dt = self.clock.tick();
        self.camera_controller.update(dt);

        let state = self.camera_controller.state();
        if self.camera_controller.keys().any() {
            debug!(
                "pos=({:.2}, {:.2}, {:.2}) yaw={:.1} pitch={:.1} fov={:.1}",
                state.position.x,
                state.position.y,
                state.position.z,
                state.yaw,
                state.pitch,
                state.fov
            );
        }

        self.camera_controller.uniform(
            self.aspect,
            self.window_settings.near_plane,
            self.window_settings.far_plane,
        )
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    // minimized windows report a zero height
    width.max(1) as f32 / height.max(1) as f32
}
