#![forbid(unsafe_code)]

//! vtx public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use vtx_core::codec::{SeqValue, Sequence, Standard};
pub use vtx_core::geometry::{Rect, ScreenSize};
pub use vtx_core::key::Key;

// --- Render re-exports -----------------------------------------------------

pub use vtx_render::buffer::ScreenDiffBuffer;
pub use vtx_render::cell::{Attr, Cell, Color};
pub use vtx_render::encoder::AttributeEncoder;
pub use vtx_render::mosaic::{self, LuminanceGrid};

// --- Widget re-exports -----------------------------------------------------

pub use vtx_widgets::{
    Footer, Header, HorizontalRule, Label, ListEntry, PageRow, RuleKind, SelectableList, Widget,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use vtx_runtime::{
    Context, Display, KeyDecoder, KeyListener, MemoryTransport, Scene, SceneStack,
    SharedTransport, Transition, Transport,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{Attr, Cell, Color, Key, ListEntry, Rect, ScreenSize, Standard, Widget};

    #[cfg(feature = "runtime")]
    pub use crate::{Context, Scene, SceneStack, Transition, Transport};
}
