#![forbid(unsafe_code)]

//! Runtime for the vtx Videotex stack.
//!
//! This crate ties the codec, render pipeline, and widgets into a running
//! application: a [`Transport`] carries bytes to and from the terminal, a
//! [`Display`] pushes frames through the diff/encode pipeline, a
//! [`KeyDecoder`] turns received byte sequences into logical keys and fans
//! them out to widgets, and a [`SceneStack`] drives the cooperative main
//! loop over [`Scene`]s.
//!
//! # Design Principles
//!
//! - **No globals.** Everything a scene needs lives in one [`Context`],
//!   constructed once and passed by `&mut`. The single-threaded model is
//!   explicit in the types (`Rc`, `RefCell`), not an unstated assumption.
//! - **Non-blocking input.** Absence of input is a normal outcome returned
//!   immediately, never a wait. The only suspension point is a fixed short
//!   sleep between poll cycles.
//! - **Transport errors stop at the boundary.** Display operations return
//!   `io::Result`; everything above them is infallible.

pub mod display;
pub mod keyboard;
pub mod scene;
pub mod stack;
pub mod transport;

pub use display::Display;
pub use keyboard::{KeyDecoder, KeyListener};
pub use scene::{Scene, Transition};
pub use stack::SceneStack;
pub use transport::{MemoryTransport, SharedTransport, Transport};

use vtx_core::codec::Standard;
use vtx_core::geometry::ScreenSize;

/// Everything a scene needs to draw and read input.
///
/// Constructed once at startup and threaded through every lifecycle hook
/// by mutable reference.
pub struct Context {
    /// Frame output: diff, encode, transmit.
    pub display: Display,
    /// Key input: decode and dispatch.
    pub keyboard: KeyDecoder,
}

impl Context {
    /// Build a context over one transport, shared by display and keyboard.
    #[must_use]
    pub fn new(transport: SharedTransport, screen: ScreenSize, standard: Standard) -> Self {
        Self {
            display: Display::new(transport.clone(), screen, standard),
            keyboard: KeyDecoder::new(transport),
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}
