//! Pointer message interception.
//!
//! [`MessageInterceptor`] sits in a window's message chain. For each pointer
//! message it runs classify → extract → normalize → publish, and then always
//! forwards the message to default handling.
//!
//! ## Messages
//! - `WM_POINTERDOWN`, `WM_POINTERUPDATE` and `WM_POINTERUP` are inspected.
//! - Anything else is forwarded untouched.
//!
//! ## `wParam` layout
//! - low word: pointer identifier
//! - high word: `POINTER_MESSAGE_FLAG_*` bits (new, in range, in contact, primary, ...)
//!
//! Decoding is pure so it can be exercised off-Windows; the Win32 hook only
//! supplies the raw `(msg, wParam)` pair and the default-handling callback.

use crate::event::Transition;
use crate::normalize::Normalizer;
use crate::pointer::{classify, extract, Classification, ClientSpace, PointerId, PointerSource};
use crate::publisher::EventPublisher;
use std::rc::Rc;

// Local constants (avoid relying on module exports that vary by windows-sys version)
const WM_POINTERUPDATE: u32 = 0x0245;
const WM_POINTERDOWN: u32 = 0x0246;
const WM_POINTERUP: u32 = 0x0247;

const POINTER_MESSAGE_FLAG_NEW: u16 = 0x0001;
const POINTER_MESSAGE_FLAG_INRANGE: u16 = 0x0002;
const POINTER_MESSAGE_FLAG_INCONTACT: u16 = 0x0004;
const POINTER_MESSAGE_FLAG_PRIMARY: u16 = 0x2000;

/// A decoded pointer message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerMessage {
    pub transition: Transition,
    pub pointer_id: PointerId,
    /// `POINTER_MESSAGE_FLAG_*` bits from the high word of `wParam`.
    pub flags: u16,
}

impl PointerMessage {
    /// Decode `(msg, wParam)`, or `None` if `msg` is not a pointer message we handle.
    pub fn decode(msg: u32, wparam: usize) -> Option<Self> {
        let transition = match msg {
            WM_POINTERDOWN => Transition::Down,
            WM_POINTERUPDATE => Transition::Update,
            WM_POINTERUP => Transition::Up,
            _ => return None,
        };
        Some(Self {
            transition,
            pointer_id: u32::from(loword(wparam)),
            flags: hiword(wparam),
        })
    }

    /// Encode back to `(msg, wParam)`. Mostly useful for driving the interceptor in tests.
    pub fn encode(&self) -> (u32, usize) {
        let msg = match self.transition {
            Transition::Down => WM_POINTERDOWN,
            Transition::Update => WM_POINTERUPDATE,
            Transition::Up => WM_POINTERUP,
        };
        let wparam = (usize::from(self.flags) << 16) | (self.pointer_id as usize & 0xFFFF);
        (msg, wparam)
    }

    #[inline]
    pub fn in_contact(&self) -> bool {
        self.flags & POINTER_MESSAGE_FLAG_INCONTACT != 0
    }

    #[inline]
    pub fn in_range(&self) -> bool {
        self.flags & POINTER_MESSAGE_FLAG_INRANGE != 0
    }

    #[inline]
    pub fn is_new(&self) -> bool {
        self.flags & POINTER_MESSAGE_FLAG_NEW != 0
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.flags & POINTER_MESSAGE_FLAG_PRIMARY != 0
    }
}

/// Flag bits for [`PointerMessage::flags`].
pub mod flags {
    pub const NEW: u16 = super::POINTER_MESSAGE_FLAG_NEW;
    pub const IN_RANGE: u16 = super::POINTER_MESSAGE_FLAG_INRANGE;
    pub const IN_CONTACT: u16 = super::POINTER_MESSAGE_FLAG_INCONTACT;
    pub const PRIMARY: u16 = super::POINTER_MESSAGE_FLAG_PRIMARY;
}

#[inline]
fn loword(w: usize) -> u16 {
    (w & 0xFFFF) as u16
}

#[inline]
fn hiword(w: usize) -> u16 {
    ((w >> 16) & 0xFFFF) as u16
}

/// Pen-only filter in front of a window's default message handling.
pub struct MessageInterceptor {
    source: Box<dyn PointerSource>,
    space: Box<dyn ClientSpace>,
    normalizer: Normalizer,
    publisher: Rc<EventPublisher>,
}

impl MessageInterceptor {
    pub fn new(
        source: impl PointerSource + 'static,
        space: impl ClientSpace + 'static,
        normalizer: Normalizer,
        publisher: Rc<EventPublisher>,
    ) -> Self {
        Self {
            source: Box::new(source),
            space: Box::new(space),
            normalizer,
            publisher,
        }
    }

    /// Handle one message, then run `forward` (default handling) exactly once.
    ///
    /// `forward`'s result is returned unchanged. Nothing on the pointer path can
    /// skip it: inspection returns `()` and never fails.
    pub fn intercept<R>(&self, msg: u32, wparam: usize, forward: impl FnOnce() -> R) -> R {
        if let Some(message) = PointerMessage::decode(msg, wparam) {
            self.inspect(&message);
        }
        forward()
    }

    /// Run the pen pipeline for a decoded message, publishing at most one event.
    fn inspect(&self, message: &PointerMessage) {
        let id = message.pointer_id;

        match classify(&*self.source, id) {
            Classification::Pen => {}
            Classification::Other(kind) => {
                log::trace!("pointer {id}: rejected {kind:?} input");
                return;
            }
            Classification::LookupFailed => {
                log::trace!("pointer {id}: type lookup failed");
                return;
            }
        }

        let Some(sample) = extract(&*self.source, id) else {
            log::trace!("pointer {id}: pen info lookup failed");
            return;
        };

        let event = self.normalizer.normalize(
            &sample,
            message.transition,
            message.in_contact(),
            &*self.space,
        );
        log::trace!("pointer {id}: publishing {event:?}");
        self.publisher.push(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pointer_messages() {
        let wparam = (usize::from(flags::IN_CONTACT | flags::IN_RANGE) << 16) | 0x0011;
        let msg = PointerMessage::decode(WM_POINTERDOWN, wparam).unwrap();
        assert_eq!(msg.transition, Transition::Down);
        assert_eq!(msg.pointer_id, 0x11);
        assert!(msg.in_contact());
        assert!(msg.in_range());
        assert!(!msg.is_primary());

        let up = PointerMessage::decode(WM_POINTERUP, 0x0011).unwrap();
        assert_eq!(up.transition, Transition::Up);
        assert!(!up.in_contact());
    }

    #[test]
    fn ignores_other_messages() {
        // WM_MOUSEMOVE, WM_POINTERENTER, WM_POINTERLEAVE
        for msg in [0x0200, 0x0249, 0x024A] {
            assert_eq!(PointerMessage::decode(msg, 0x1), None);
        }
    }

    #[test]
    fn encode_inverts_decode() {
        let msg = PointerMessage {
            transition: Transition::Update,
            pointer_id: 3,
            flags: flags::PRIMARY | flags::IN_CONTACT,
        };
        let (raw, wparam) = msg.encode();
        assert_eq!(PointerMessage::decode(raw, wparam), Some(msg));
    }
}
