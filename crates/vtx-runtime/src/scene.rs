#![forbid(unsafe_code)]

//! Scene lifecycle contract.

use std::io;

use crate::Context;
use vtx_core::key::Key;

/// What a scene wants the stack to do after an update.
pub enum Transition {
    /// Keep running.
    Stay,
    /// Suspend this scene and enter a child.
    Call(Box<dyn Scene>),
    /// Replace this scene in place. No lifecycle hooks run and the display
    /// is not cleared; the replacement draws over the existing frame.
    Goto(Box<dyn Scene>),
    /// Exit this scene and resume the caller, or end the loop if there is
    /// no caller.
    Return,
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Stay => "Stay",
            Self::Call(_) => "Call(..)",
            Self::Goto(_) => "Goto(..)",
            Self::Return => "Return",
        })
    }
}

/// One navigable application screen.
///
/// Lifecycle: constructed, entered (once), possibly suspended and resumed
/// any number of times, exited (terminal). The stack invokes the hooks;
/// scenes never call each other directly.
pub trait Scene {
    /// Invoked once when the scene becomes current via a call.
    fn on_enter(&mut self, _ctx: &mut Context) {}

    /// Invoked once when the scene stops being current for good.
    fn on_exit(&mut self, _ctx: &mut Context) {}

    /// Invoked when the scene becomes current again after a child returned.
    fn on_resume(&mut self, _ctx: &mut Context) {}

    /// One non-blocking poll-and-react step. Returns the key that was
    /// received, if any; a returned key triggers a re-render.
    fn update(&mut self, ctx: &mut Context) -> Option<Key>;

    /// Produce and push the current frame through the display.
    fn render(&mut self, ctx: &mut Context) -> io::Result<()>;

    /// The transition requested by the last update, consumed by the stack.
    /// Defaults to staying put.
    fn take_transition(&mut self) -> Transition {
        Transition::Stay
    }
}
