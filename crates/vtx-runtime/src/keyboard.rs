#![forbid(unsafe_code)]

//! Key input: decode received sequences and fan them out.
//!
//! One poll makes one non-blocking read attempt. A received sequence is
//! decoded to a logical [`Key`] and offered to every registered listener
//! in registration order, never short-circuited: a key a list consumed may
//! still matter to a status widget behind it. Listeners are held weakly,
//! so widgets owned by a popped scene silently drop out of dispatch.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::transport::SharedTransport;
use vtx_core::key::Key;
use vtx_widgets::Widget;

/// A recipient of decoded keys.
pub trait KeyListener {
    /// Offer a key. Returns true iff it was consumed.
    fn handle_key(&mut self, key: Key) -> bool;
}

impl<W: Widget> KeyListener for W {
    fn handle_key(&mut self, key: Key) -> bool {
        Widget::handle_key(self, key)
    }
}

/// Decodes transport bytes to keys and dispatches them.
pub struct KeyDecoder {
    transport: SharedTransport,
    listeners: Vec<Weak<RefCell<dyn KeyListener>>>,
}

impl KeyDecoder {
    #[must_use]
    pub fn new(transport: SharedTransport) -> Self {
        Self {
            transport,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. The decoder keeps only a weak handle; dropping
    /// the `Rc` elsewhere unregisters it.
    pub fn register<L: KeyListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) {
        let weak = Rc::downgrade(listener);
        self.listeners.push(weak);
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.iter().filter(|w| w.strong_count() > 0).count()
    }

    /// One non-blocking poll. No pending data returns `(false, None)`
    /// immediately. On data, the decoded key is offered to every live
    /// listener; the first element is the logical-or of their results.
    pub fn poll(&mut self) -> (bool, Option<Key>) {
        let Some(bytes) = self.transport.borrow_mut().poll_sequence() else {
            return (false, None);
        };
        let Some(key) = Key::from_sequence(&bytes) else {
            return (false, None);
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(?key, "dispatch");

        self.listeners.retain(|w| w.strong_count() > 0);
        let mut consumed = false;
        for weak in &self.listeners {
            if let Some(listener) = weak.upgrade() {
                consumed |= listener.borrow_mut().handle_key(key);
            }
        }
        (consumed, Some(key))
    }
}

impl std::fmt::Debug for KeyDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyDecoder")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;

    struct Recorder {
        seen: Vec<Key>,
        consume: bool,
    }

    // Registered through the blanket Widget impl, like real widgets.
    impl Widget for Recorder {
        fn render(&self) -> Vec<vtx_render::cell::Cell> {
            Vec::new()
        }

        fn handle_key(&mut self, key: Key) -> bool {
            self.seen.push(key);
            self.consume
        }
    }

    fn recorder(consume: bool) -> Rc<RefCell<Recorder>> {
        Rc::new(RefCell::new(Recorder {
            seen: Vec::new(),
            consume,
        }))
    }

    #[test]
    fn poll_without_data_returns_immediately() {
        let mut decoder = KeyDecoder::new(MemoryTransport::new().shared());
        assert_eq!(decoder.poll(), (false, None));
    }

    #[test]
    fn every_listener_sees_the_key() {
        let transport = MemoryTransport::new().shared();
        transport.borrow_mut().push_sequence([0x0D]);
        let mut decoder = KeyDecoder::new(transport);

        let first = recorder(true);
        let second = recorder(false);
        decoder.register(&first);
        decoder.register(&second);

        assert_eq!(decoder.poll(), (true, Some(Key::Enter)));
        assert_eq!(first.borrow().seen, vec![Key::Enter]);
        assert_eq!(second.borrow().seen, vec![Key::Enter]);
    }

    #[test]
    fn consumed_is_false_when_no_listener_takes_the_key() {
        let transport = MemoryTransport::new().shared();
        transport.borrow_mut().push_sequence([0x1B, 0x5B, 0x41]);
        let mut decoder = KeyDecoder::new(transport);
        let listener = recorder(false);
        decoder.register(&listener);
        assert_eq!(decoder.poll(), (false, Some(Key::Up)));
    }

    #[test]
    fn dropped_listeners_leave_dispatch() {
        let transport = MemoryTransport::new().shared();
        transport.borrow_mut().push_sequence([0x0D]);
        transport.borrow_mut().push_sequence([0x0D]);
        let mut decoder = KeyDecoder::new(transport);

        let kept = recorder(false);
        let dropped = recorder(true);
        decoder.register(&kept);
        decoder.register(&dropped);
        assert_eq!(decoder.poll(), (true, Some(Key::Enter)));

        drop(dropped);
        assert_eq!(decoder.poll(), (false, Some(Key::Enter)));
        assert_eq!(decoder.listener_count(), 1);
        assert_eq!(kept.borrow().seen.len(), 2);
    }

    #[test]
    fn unmapped_bytes_fall_back_to_a_literal_character() {
        let transport = MemoryTransport::new().shared();
        transport.borrow_mut().push_sequence([b'q']);
        let mut decoder = KeyDecoder::new(transport);
        assert_eq!(decoder.poll(), (false, Some(Key::Char('q'))));
    }
}
