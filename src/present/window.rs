use minifb::{Key, Window, WindowOptions};

use crate::foundation::error::{JetframeError, JetframeResult};
use crate::present::surface::Surface;
use crate::render::view::FrameView;
use crate::session::input::InputState;

/// Options for [`WindowSurface`].
#[derive(Clone, Debug)]
pub struct WindowSurfaceOpts {
    /// Window title. The score caption is appended to it.
    pub title: String,
    /// Client area width in pixels.
    pub width: u32,
    /// Client area height in pixels.
    pub height: u32,
    /// Frame pacing target; `0` disables pacing.
    pub target_fps: u32,
}

/// Fixed-size native window backed by `minifb`.
///
/// Each present converts the BGRA frame to `0RGB` words and pushes them to the window, which
/// also pumps OS events so key state stays current.
pub struct WindowSurface {
    window: Window,
    title: String,
    scratch: Vec<u32>,
}

impl WindowSurface {
    /// Open the window.
    pub fn open(opts: WindowSurfaceOpts) -> JetframeResult<Self> {
        let options = WindowOptions {
            resize: false,
            ..WindowOptions::default()
        };
        let mut window = Window::new(
            &opts.title,
            opts.width as usize,
            opts.height as usize,
            options,
        )
        .map_err(|e| JetframeError::present(format!("window creation failed: {e}")))?;
        window.set_target_fps(opts.target_fps as usize);
        tracing::info!(width = opts.width, height = opts.height, "window opened");

        Ok(Self {
            window,
            title: opts.title,
            scratch: Vec::new(),
        })
    }
}

impl Surface for WindowSurface {
    fn present(&mut self, frame: FrameView<'_>) -> JetframeResult<()> {
        if !self.window.is_open() {
            return Err(JetframeError::present("window is closed"));
        }
        frame.write_0rgb_u32(&mut self.scratch);
        self.window
            .update_with_buffer(&self.scratch, frame.width as usize, frame.height as usize)
            .map_err(|e| JetframeError::present(format!("window update failed: {e}")))
    }

    fn is_open(&self) -> bool {
        self.window.is_open()
    }

    fn poll_input(&mut self) -> InputState {
        InputState {
            left: self.window.is_key_down(Key::Left),
            right: self.window.is_key_down(Key::Right),
            up: self.window.is_key_down(Key::Up),
            down: self.window.is_key_down(Key::Down),
            quit: self.window.is_key_down(Key::Escape),
        }
    }

    fn set_caption(&mut self, caption: &str) {
        self.window.set_title(&format!("{} - {caption}", self.title));
    }
}
