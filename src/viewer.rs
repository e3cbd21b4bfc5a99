//! Standalone window that drives an [`ArcballController`] from winit
//! events.
//!
//! The viewer owns the window lifecycle, builds the projection for the
//! current framebuffer size and fans input out to its subscribers. Drawing
//! the scene is left to the renderer that consumes
//! [`ArcballController::current_orientation`]; the viewer reads it once per
//! redraw and shows it in the window title.
//!
//! ```no_run
//! # use arcball::Viewer;
//! Viewer::builder()
//!     .with_title("Arcball demo")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use glam::{DMat4, DQuat};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

use crate::{
    arcball::{MatrixUnprojector, Viewport},
    error::ArcballError,
    input::{dispatch, KeyAction},
    options::{Options, ProjectionOptions},
    ArcballController, InputEvent, MouseButton,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options.
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title, overriding `options.window.title`.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.window.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window whose pointer drags rotate an arcball.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), ArcballError> {
        self.options.validate()?;

        let event_loop =
            EventLoop::new().map_err(|e| ArcballError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            arcball: None,
            shown_orientation: None,
            options: self.options,
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ArcballError::Viewer(e.to_string()))?;
        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Window>,
    arcball: Option<ArcballController>,
    /// Orientation currently displayed in the title.
    shown_orientation: Option<DQuat>,
    options: Options,
    /// Failure raised inside the event loop, returned from `run`.
    error: Option<ArcballError>,
}

/// Projection for a framebuffer size; identity for a degenerate size,
/// which the controller rejects anyway.
fn projection_for(options: &ProjectionOptions, width: u32, height: u32) -> DMat4 {
    Viewport::from_pixels(width, height)
        .map_or(DMat4::IDENTITY, |viewport| options.matrix(viewport))
}

fn toggle_fullscreen(window: &Window) {
    let next = match window.fullscreen() {
        Some(_) => None,
        None => Some(Fullscreen::Borderless(None)),
    };
    log::info!("fullscreen {}", if next.is_some() { "on" } else { "off" });
    window.set_fullscreen(next);
}

impl ViewerApp {
    fn create_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(), ArcballError> {
        let opts = &self.options.window;
        let mut attrs = Window::default_attributes()
            .with_title(opts.title.clone())
            .with_inner_size(LogicalSize::new(opts.width, opts.height));
        if opts.start_fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        let window = event_loop
            .create_window(attrs)
            .map_err(|e| ArcballError::Viewer(e.to_string()))?;

        let size = window.inner_size();
        let projection =
            projection_for(&self.options.projection, size.width, size.height);
        self.arcball = Some(ArcballController::with_options(
            &window,
            projection,
            &self.options.arcball,
            MatrixUnprojector,
        ));
        log::info!("window created at {}x{}", size.width, size.height);

        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    /// Map a key press onto a bound action. Viewer-level actions are handled
    /// here; the rest become input events.
    fn handle_key(
        &self,
        event_loop: &ActiveEventLoop,
        window: &Window,
        event: &KeyEvent,
    ) -> Option<InputEvent> {
        if event.state != ElementState::Pressed || event.repeat {
            return None;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        let key_str = format!("{code:?}");
        match self.options.keybindings.lookup(&key_str)? {
            KeyAction::Quit => {
                event_loop.exit();
                None
            }
            KeyAction::ToggleFullscreen => {
                toggle_fullscreen(window);
                None
            }
            action @ KeyAction::ResetRotation => Some(InputEvent::Action(action)),
        }
    }

    fn show_orientation(&mut self) {
        let (Some(window), Some(arcball)) = (&self.window, &self.arcball) else {
            return;
        };
        let q = arcball.current_orientation();
        if self.shown_orientation == Some(q) {
            return;
        }
        log::trace!("orientation {q:?}");
        window.set_title(&format!(
            "{} [w={:.3} x={:.3} y={:.3} z={:.3}]",
            self.options.window.title, q.w, q.x, q.y, q.z
        ));
        self.shown_orientation = Some(q);
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            log::error!("{e}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else {
            return;
        };

        let input = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                None
            }
            WindowEvent::RedrawRequested => {
                self.show_orientation();
                None
            }
            WindowEvent::Resized(size) => Some(InputEvent::ViewportChanged {
                width: f64::from(size.width),
                height: f64::from(size.height),
                projection: projection_for(
                    &self.options.projection,
                    size.width,
                    size.height,
                ),
            }),
            WindowEvent::CursorMoved { position, .. } => {
                Some(InputEvent::CursorMoved {
                    x: position.x,
                    y: position.y,
                })
            }
            WindowEvent::MouseInput { button, state, .. } => {
                MouseButton::from_winit(button).map(|button| {
                    InputEvent::MouseButton {
                        button,
                        pressed: state == ElementState::Pressed,
                    }
                })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event_loop, window, &event)
            }
            _ => None,
        };

        let Some(input) = input else {
            return;
        };
        let Some(arcball) = self.arcball.as_mut() else {
            return;
        };
        if dispatch(&input, &mut [arcball]) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
