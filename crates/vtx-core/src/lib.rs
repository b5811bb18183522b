#![forbid(unsafe_code)]

//! Core types for the vtx Videotex stack: character transcoding,
//! the logical key model, and screen geometry.
//!
//! # Role in vtx
//! `vtx-core` is the leaf crate. It knows nothing about cells, widgets, or
//! scenes; it owns the pieces every other layer shares: the transcoding
//! standards and their literal byte tables, the logical key surface exposed
//! to widgets, and the clamped rectangle type widgets are bounded by.

pub mod codec;
pub mod geometry;
pub mod key;

pub use codec::{Sequence, SeqValue, Standard};
pub use geometry::{Rect, ScreenSize};
pub use key::Key;
