#![forbid(unsafe_code)]

//! Frame output: clip, diff, encode, transmit.
//!
//! `Display` is the single writer on the output side. Every frame goes
//! through the same ordered step: off-screen cells are dropped, the diff
//! buffer keeps only what changed, the encoder turns changes into byte
//! runs, and each run is sent through the transport. Nothing else writes
//! to the transport, so the encoder's tracked device state stays truthful.

use std::io;

use crate::transport::SharedTransport;
use vtx_core::codec::Standard;
use vtx_core::geometry::ScreenSize;
use vtx_render::buffer::ScreenDiffBuffer;
use vtx_render::cell::Cell;
use vtx_render::encoder::AttributeEncoder;
use vtx_render::videotex::{FF, US};

/// The display side of a [`Context`](crate::Context).
pub struct Display {
    transport: SharedTransport,
    buffer: ScreenDiffBuffer,
    encoder: AttributeEncoder,
    screen: ScreenSize,
    standard: Standard,
}

impl Display {
    #[must_use]
    pub fn new(transport: SharedTransport, screen: ScreenSize, standard: Standard) -> Self {
        Self {
            transport,
            buffer: ScreenDiffBuffer::new(screen),
            encoder: AttributeEncoder::new(standard),
            screen,
            standard,
        }
    }

    /// The configured screen geometry.
    #[must_use]
    pub const fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// Push one frame: drop off-screen cells, diff against the last frame,
    /// encode the changes, and transmit each run.
    ///
    /// Diff, encode, and transmit happen as one step; no poll is observed
    /// in between, so the device state the encoder tracks cannot drift.
    pub fn update(&mut self, cells: &[Cell]) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("display_update", cells = cells.len()).entered();

        let on_screen: Vec<Cell> = cells
            .iter()
            .filter(|c| self.screen.contains(c.x, c.y))
            .copied()
            .collect();
        let changed = self.buffer.apply(&on_screen);
        let runs = self.encoder.encode(&changed);
        let mut transport = self.transport.borrow_mut();
        for run in &runs {
            transport.send(run)?;
        }
        Ok(())
    }

    /// Clear the device and forget everything: send FF (clear screen, home
    /// cursor, reset colors and attributes), empty the diff buffer, and
    /// reset the encoder's tracked state. The next frame is drawn in full.
    pub fn clear(&mut self) -> io::Result<()> {
        self.transport.borrow_mut().send(&[FF])?;
        self.buffer.clear();
        self.encoder.reset();
        Ok(())
    }

    /// Write text to the status row (row 0), bypassing the diff buffer.
    ///
    /// The status row sits above the addressable page; the buffer never
    /// covers it and the encoder's cursor tracking is deliberately left
    /// stale (the device returns the cursor to the page after row 0
    /// output).
    pub fn write_status(&mut self, text: &str) -> io::Result<()> {
        let mut out = vec![US, 0x40, 0x41];
        out.extend_from_slice(&self.standard.canonicalize(&text.into()));
        self.transport.borrow_mut().send(&out)
    }
}

impl std::fmt::Debug for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Display")
            .field("screen", &self.screen)
            .field("standard", &self.standard)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;
    use std::rc::Rc;
    use vtx_render::videotex::RS;

    fn display_over(transport: Rc<std::cell::RefCell<MemoryTransport>>) -> Display {
        Display::new(transport, ScreenSize::default(), Standard::Videotex)
    }

    #[test]
    fn update_sends_only_changes() {
        let transport = MemoryTransport::new().shared();
        let mut display = display_over(transport.clone());
        let frame = [Cell::new(1, 1, 'a')];

        display.update(&frame).unwrap();
        assert_eq!(transport.borrow().sent(), &[vec![RS, b'a']]);

        display.update(&frame).unwrap();
        assert_eq!(transport.borrow().sent().len(), 1);
    }

    #[test]
    fn off_screen_cells_are_dropped() {
        let transport = MemoryTransport::new().shared();
        let mut display = display_over(transport.clone());
        display.update(&[Cell::new(41, 1, 'x'), Cell::new(1, 25, 'y')]).unwrap();
        assert!(transport.borrow().sent().is_empty());
    }

    #[test]
    fn clear_sends_ff_and_forces_a_full_redraw() {
        let transport = MemoryTransport::new().shared();
        let mut display = display_over(transport.clone());
        let frame = [Cell::new(2, 3, 'z')];

        display.update(&frame).unwrap();
        display.clear().unwrap();
        assert_eq!(transport.borrow().sent().last(), Some(&vec![FF]));

        display.update(&frame).unwrap();
        let sent = transport.borrow().sent().len();
        assert_eq!(sent, 3);
    }

    #[test]
    fn status_row_bypasses_the_diff_buffer() {
        let transport = MemoryTransport::new().shared();
        let mut display = display_over(transport.clone());
        display.write_status("ab").unwrap();
        display.write_status("ab").unwrap();
        assert_eq!(
            transport.borrow().sent(),
            &[vec![US, 0x40, 0x41, b'a', b'b'], vec![US, 0x40, 0x41, b'a', b'b']]
        );
    }
}
