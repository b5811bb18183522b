#![forbid(unsafe_code)]

//! Rendering kernel for the vtx Videotex stack.
//!
//! This crate turns "what the screen should show" into the minimal byte
//! runs that reproduce it on a remote character-cell device with no local
//! framebuffer:
//!
//! - [`cell`] — the atomic renderable unit and its color/attribute enums
//! - [`videotex`] — pure protocol byte generation (positioning, colors,
//!   attribute transitions)
//! - [`buffer`] — the last-transmitted screen state and its diff operation
//! - [`encoder`] — the stateful translator from changed cells to byte runs
//! - [`mosaic`] — 2x3 luminance blocks to semigraphic glyph cells
//!
//! # How it fits in the system
//! Widgets produce cells; [`buffer::ScreenDiffBuffer::apply`] drops the
//! unchanged ones; [`encoder::AttributeEncoder::encode`] emits byte runs;
//! a transport owned by the runtime sends them. Each stage's output is the
//! next stage's input.

pub mod buffer;
pub mod cell;
pub mod encoder;
pub mod mosaic;
pub mod videotex;

pub use buffer::ScreenDiffBuffer;
pub use cell::{Attr, Cell, Color};
pub use encoder::AttributeEncoder;
pub use mosaic::LuminanceGrid;
