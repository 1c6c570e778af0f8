use crate::foundation::error::JetframeResult;
use crate::render::view::FrameView;
use crate::session::input::InputState;

/// Destination for composited frames.
///
/// A surface accepts a BGRA8 blob of known width, height, and stride and copies it wherever
/// it needs to go (a window, a file, memory). Native windows are also the source of keyboard
/// input, so polling lives here too; non-interactive surfaces keep the defaults.
pub trait Surface {
    /// Copy one frame out. Must not retain the borrow.
    fn present(&mut self, frame: FrameView<'_>) -> JetframeResult<()>;

    /// `false` once the user closed the surface.
    fn is_open(&self) -> bool {
        true
    }

    /// Current key state. Non-interactive surfaces report nothing pressed.
    fn poll_input(&mut self) -> InputState {
        InputState::IDLE
    }

    /// Short status line (score) shown by surfaces that have somewhere to show it.
    fn set_caption(&mut self, _caption: &str) {}
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn present(&mut self, frame: FrameView<'_>) -> JetframeResult<()> {
        (**self).present(frame)
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn poll_input(&mut self) -> InputState {
        (**self).poll_input()
    }

    fn set_caption(&mut self, caption: &str) {
        (**self).set_caption(caption)
    }
}
