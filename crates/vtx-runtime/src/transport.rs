#![forbid(unsafe_code)]

//! Byte transport boundary.
//!
//! The runtime never talks to a serial line or socket directly; it sends
//! encoded runs through a [`Transport`] and polls it for received byte
//! sequences. The concrete link (serial port, socket, pty) lives outside
//! this workspace. [`MemoryTransport`] is the in-process implementation
//! used by tests and the demo.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

/// A bidirectional byte link to the terminal.
pub trait Transport {
    /// Transmit one byte run.
    fn send(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// One non-blocking read attempt. `None` means no data was pending,
    /// which is a normal outcome, not an error.
    fn poll_sequence(&mut self) -> Option<Vec<u8>>;
}

/// Shared handle to a transport. Display and keyboard hold the same link.
pub type SharedTransport = Rc<RefCell<dyn Transport>>;

/// In-memory transport: scripted input sequences, captured output.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    incoming: VecDeque<Vec<u8>>,
    sent: Vec<Vec<u8>>,
}

impl MemoryTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap in the shared handle the runtime expects.
    #[must_use]
    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    /// Queue a byte sequence to be returned by a later poll.
    pub fn push_sequence(&mut self, bytes: impl Into<Vec<u8>>) {
        self.incoming.push_back(bytes.into());
    }

    /// Every run sent so far, in order.
    #[must_use]
    pub fn sent(&self) -> &[Vec<u8>] {
        &self.sent
    }

    /// All sent bytes flattened into one stream.
    #[must_use]
    pub fn sent_bytes(&self) -> Vec<u8> {
        self.sent.concat()
    }

    /// Drop the captured output.
    pub fn clear_sent(&mut self) {
        self.sent.clear();
    }
}

impl Transport for MemoryTransport {
    fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sent.push(bytes.to_vec());
        Ok(())
    }

    fn poll_sequence(&mut self) -> Option<Vec<u8>> {
        self.incoming.pop_front()
    }
}
