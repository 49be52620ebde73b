//! Window, event loop and frame scheduling

pub mod commands;
pub mod game;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

pub use commands::{Command, map_key};
pub use game::{FrameOutcome, Game};

use crate::clock::FrameClock;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::input::{CursorHandle, CursorTracker, DetectorProcess, FingerTracker};
use crate::renderer::{RenderState, build_scene};
use crate::settings::{Settings, TrackerSource};
use crate::sim::GameState;

pub const WINDOW_TITLE: &str = "Hand Breakout";

/// Seconds between frame rate log lines
const FPS_LOG_INTERVAL_SECS: u32 = 5;

/// Build the finger tracker named by the settings
///
/// The cursor tracker also returns the handle the window feeds it through.
pub fn create_tracker(
    settings: &Settings,
) -> anyhow::Result<(Box<dyn FingerTracker>, Option<CursorHandle>)> {
    match &settings.tracker {
        TrackerSource::Cursor => {
            let tracker = CursorTracker::new();
            let handle = tracker.handle();
            Ok((Box::new(tracker), Some(handle)))
        }
        TrackerSource::Detector { program, args } => {
            let process = DetectorProcess::spawn(program, args, settings.mirror)
                .with_context(|| format!("failed to start hand detector `{}`", program))?;
            Ok((Box::new(process), None))
        }
    }
}

/// Main application
pub struct App {
    settings: Settings,
    game: Game,
    cursor: Option<CursorHandle>,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    clock: FrameClock,
    frames: u64,
    /// Setup failure that ended the event loop
    init_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(settings: Settings, tracker: Box<dyn FingerTracker>, cursor: Option<CursorHandle>) -> Self {
        let seed = settings.seed_or_clock();
        log::info!("Game seed: {}", seed);
        let state = GameState::with_tuning(seed, settings.tuning());

        Self {
            clock: FrameClock::new(settings.fps, Instant::now()),
            settings,
            game: Game::new(state, tracker),
            cursor,
            window: None,
            render_state: None,
            frames: 0,
            init_error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(FIELD_WIDTH as f64, FIELD_HEIGHT as f64))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let render_state = pollster::block_on(RenderState::new(window.clone()))?;
        log::info!("Renderer initialized");

        self.render_state = Some(render_state);
        self.window = Some(window);
        self.clock = FrameClock::new(self.settings.fps, Instant::now());
        Ok(())
    }

    fn run_command(&mut self, command: Command, event_loop: &ActiveEventLoop) {
        match command {
            Command::Reset => self.game.reset(),
            Command::Quit => {
                log::info!("Quit requested, exiting");
                event_loop.exit();
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = &mut self.render_state else {
            return;
        };

        let vertices = build_scene(&self.game.state);
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }

    fn log_fps(&self, now: Instant) {
        let interval = u64::from(self.settings.fps.max(1)) * u64::from(FPS_LOG_INTERVAL_SECS);
        if self.frames % interval == 0
            && let Some(fps) = self.clock.measured_fps(now)
        {
            log::debug!("FPS: {:.1}", fps);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            log::error!("Setup failed: {:#}", e);
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed()
                    && !event.repeat
                    && let PhysicalKey::Code(code) = event.physical_key
                    && let Some(command) = map_key(code)
                {
                    self.run_command(command, event_loop);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let (Some(cursor), Some(render_state)) = (&self.cursor, &self.render_state) {
                    cursor.moved(render_state.viewport.surface_to_field_x(position.x as f32));
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if let Some(cursor) = &self.cursor {
                    cursor.left();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }

        let now = Instant::now();
        if self.clock.due(now) {
            self.game.frame();
            self.clock.advance(now);
            self.frames += 1;
            self.log_fps(now);

            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_frame()));
    }
}

/// Open the window and run the game until the player quits
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let (tracker, cursor) = create_tracker(&settings)?;
    log::info!("Finger tracker: {}", settings.tracker.as_str());

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(settings, tracker, cursor);
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.init_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_tracker_is_default() {
        let (mut tracker, cursor) = create_tracker(&Settings::default()).unwrap();
        let cursor = cursor.expect("cursor tracker hands out a handle");
        assert_eq!(tracker.poll().unwrap(), None);
        cursor.moved(120.0);
        assert_eq!(tracker.poll().unwrap(), Some(120.0));
    }

    #[test]
    fn test_missing_detector_is_an_error() {
        let settings = Settings {
            tracker: TrackerSource::Detector {
                program: "/nonexistent/hand-detector".into(),
                args: vec![],
            },
            ..Settings::default()
        };
        let err = create_tracker(&settings).err().unwrap();
        assert!(err.to_string().contains("hand detector"));
    }
}
