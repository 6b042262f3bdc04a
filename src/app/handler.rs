use std::sync::Arc;

use log::{error, info, trace};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::app::app::App;
use flycam::error::FlycamError;
use flycam::settings::Settings;

pub struct AppHandler {
    pub app: Option<App>,
    pub settings: Settings,
    pub lock_to_horizontal_plane: bool,
}

impl AppHandler {
    fn create_app(&self, event_loop: &ActiveEventLoop) -> Result<App, FlycamError> {
        let window_settings = &self.settings.window;
        let window_attrs = Window::default_attributes()
            .with_title(window_settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_settings.width,
                window_settings.height,
            ));

        let window = event_loop.create_window(window_attrs).map_err(|e| {
            FlycamError::from(e)
                .with_arg("width", window_settings.width)
                .with_arg("height", window_settings.height)
        })?;
        info!(
            "window created: {}x{}",
            window_settings.width, window_settings.height
        );

        Ok(App::new(
            Arc::new(window),
            &self.settings,
            self.lock_to_horizontal_plane,
        ))
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            match self.create_app(event_loop) {
                Ok(app) => self.app = Some(app),
                Err(e) => {
                    error!("failed to create window: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            if let WindowEvent::RedrawRequested = event {
                let uniform = app.frame();
                trace!("camera uniform ready: {} bytes", uniform.as_bytes().len());
                return;
            }

            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &self.app {
            app.window.request_redraw();
        }
    }
}
