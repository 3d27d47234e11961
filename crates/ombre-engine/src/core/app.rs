use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`Runtime`](crate::window::Runtime).
pub trait App {
    /// Called once after the window and GPU are ready, before the first frame.
    fn on_start(&mut self, ctx: &mut FrameCtx<'_>) {
        let _ = ctx;
    }

    /// Called for every redraw. Input received since the previous frame is
    /// in `ctx.input_frame`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
