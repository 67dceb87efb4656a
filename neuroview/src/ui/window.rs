use std::time::Instant;

use custom_error::custom_error;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use neuroview_core::models::Framebuffer;

use crate::render::rasterizer::RasterRender;
use crate::render::render::{Render, ViewParams};
use crate::scene::scene::Scene;
use crate::ui::interaction::{InteractionEvent, ViewerState};

pub const WINDOW_WIDTH: usize = 600;
pub const WINDOW_HEIGHT: usize = 600;

custom_error! {pub ViewerError
    WindowFailed {description: String} = "Window error: {description}",
    RenderFailed {description: String} = "Render error: {description}",
}

/// The interactive viewer: owns the window, the framebuffer, the renderer
/// and the interaction state, and runs the polling render loop.
pub struct ViewerWindow {
    window: Window,
    framebuffer: Framebuffer,
    render: RasterRender,
    state: ViewerState,
}

impl ViewerWindow {

    pub fn new(title: &str) -> Result<Self, ViewerError> {
        let mut window = Window::new(
            title,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            WindowOptions::default()
        ).map_err(|err| ViewerError::WindowFailed {
            description: format!("{}", err)
        })?;
        window.limit_update_rate(Some(std::time::Duration::from_micros(33_300))); // 30fps max

        Ok(ViewerWindow {
            window,
            framebuffer: Framebuffer::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            render: RasterRender::new(),
            state: ViewerState::new(),
        })
    }

    pub fn run(&mut self, scene: &Scene) -> Result<(), ViewerError> {
        let mut prev_second = 0;
        let mut prev_second_updates = 0;
        let start = Instant::now();

        while self.state.running() {
            for event in self.poll_events() {
                self.state.handle_event(event);
            }
            if !self.state.running() {
                break;
            }

            let view = ViewParams {
                rotation_x: self.state.rotation_x(),
                rotation_y: self.state.rotation_y(),
                slice_offset: self.state.slice_offset(),
            };
            self.render.render(scene, &view, &mut self.framebuffer)
                .map_err(|err| ViewerError::RenderFailed {
                    description: format!("{}", err)
                })?;

            self.window.update_with_buffer(self.framebuffer.data(), WINDOW_WIDTH, WINDOW_HEIGHT)
                .map_err(|err| ViewerError::WindowFailed {
                    description: format!("{}", err)
                })?;

            let diff = Instant::now() - start;
            if diff.as_secs() == prev_second {
                prev_second_updates += 1;
            } else {
                self.window.set_title(format!("neuroview, fps: {}", prev_second_updates).as_str());
                prev_second_updates = 1;
                prev_second = diff.as_secs();
            }
        }

        Ok(())
    }

    /// Translate polled window input into interaction events. Button
    /// transitions are edge-detected against the current state; the arrow
    /// keys repeat while held.
    fn poll_events(&self) -> Vec<InteractionEvent> {
        let mut events = Vec::new();

        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            events.push(InteractionEvent::Quit);
            return events;
        }

        let button_down = self.window.get_mouse_down(MouseButton::Left);
        if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Pass) {
            let (x, y) = (x as f64, y as f64);
            if button_down && !self.state.mouse_down() {
                events.push(InteractionEvent::MouseButtonDown { x, y });
            } else if button_down {
                events.push(InteractionEvent::MouseMove { x, y });
            }
        }
        if !button_down && self.state.mouse_down() {
            events.push(InteractionEvent::MouseButtonUp);
        }

        if self.window.is_key_pressed(Key::Up, KeyRepeat::Yes) {
            events.push(InteractionEvent::SliceUp);
        }
        if self.window.is_key_pressed(Key::Down, KeyRepeat::Yes) {
            events.push(InteractionEvent::SliceDown);
        }

        events
    }
}
