//! Pointer classification and pen telemetry.
//!
//! The OS side of the pipeline is hidden behind two small traits so the pipeline
//! itself stays platform-free:
//! - [`PointerSource`] resolves a pointer identifier to its hardware type and,
//!   for pens, to a [`RawPenSample`].
//! - [`ClientSpace`] maps screen coordinates into a window's client area.
//!
//! Pointer identifiers are only valid while the message that carried them is
//! being dispatched. Implementations must not cache anything keyed by them.

/// Transient pointer identifier (low word of a pointer message's `wParam`).
pub type PointerId = u32;

/// Hardware type of a pointer, as reported by the OS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Generic pointer.
    Pointer,
    Touch,
    Pen,
    Mouse,
    Touchpad,
    /// A value this crate does not know about.
    Unknown(i32),
}

// Local constants (POINTER_INPUT_TYPE values).
const PT_POINTER: i32 = 1;
const PT_TOUCH: i32 = 2;
const PT_PEN: i32 = 3;
const PT_MOUSE: i32 = 4;
const PT_TOUCHPAD: i32 = 5;

impl PointerKind {
    /// Map a raw `POINTER_INPUT_TYPE` value.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            PT_POINTER => PointerKind::Pointer,
            PT_TOUCH => PointerKind::Touch,
            PT_PEN => PointerKind::Pen,
            PT_MOUSE => PointerKind::Mouse,
            PT_TOUCHPAD => PointerKind::Touchpad,
            other => PointerKind::Unknown(other),
        }
    }

    #[inline]
    pub fn is_pen(&self) -> bool {
        matches!(self, PointerKind::Pen)
    }
}

/// Outcome of classifying a pointer.
///
/// Only [`Classification::Pen`] lets a message continue down the pipeline;
/// the other two are handled identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Pen,
    /// Touch, mouse or anything else that is not a stylus. This is the palm-rejection path.
    Other(PointerKind),
    /// The OS could not resolve the identifier (already invalidated, for instance).
    LookupFailed,
}

/// Pixel position (screen or client space, depending on context).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Raw pen telemetry as reported by the digitizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawPenSample {
    /// Hardware pressure units (0..=device max, nominally 1024).
    pub pressure: u32,
    /// Tilt around the X axis in degrees, `[-90, 90]`.
    pub tilt_x: i32,
    /// Tilt around the Y axis in degrees, `[-90, 90]`.
    pub tilt_y: i32,
    /// Clockwise rotation (twist) in degrees, `0..=359`. Not published.
    pub rotation: u32,
    /// Pixel position in screen coordinates.
    pub screen: Point,
    /// Pointer flags report the pen touching the surface.
    pub in_contact: bool,
}

/// OS lookups for a pointer identifier.
pub trait PointerSource {
    /// Hardware type of `id`, or `None` if the OS cannot resolve it.
    fn pointer_kind(&self, id: PointerId) -> Option<PointerKind>;

    /// Pen telemetry for `id`, or `None` if the OS cannot resolve it.
    fn pen_sample(&self, id: PointerId) -> Option<RawPenSample>;
}

/// Screen-to-client coordinate conversion for one window.
pub trait ClientSpace {
    /// Convert a screen position to client coordinates.
    fn screen_to_client(&self, point: Point) -> Point;
}

/// Classify `id` through `source`.
pub fn classify(source: &dyn PointerSource, id: PointerId) -> Classification {
    match source.pointer_kind(id) {
        Some(kind) if kind.is_pen() => Classification::Pen,
        Some(kind) => Classification::Other(kind),
        None => Classification::LookupFailed,
    }
}

/// Read pen telemetry for an already classified pen pointer.
#[inline]
pub fn extract(source: &dyn PointerSource, id: PointerId) -> Option<RawPenSample> {
    source.pen_sample(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<PointerKind>);

    impl PointerSource for Fixed {
        fn pointer_kind(&self, _id: PointerId) -> Option<PointerKind> {
            self.0
        }

        fn pen_sample(&self, _id: PointerId) -> Option<RawPenSample> {
            None
        }
    }

    #[test]
    fn raw_kinds_map() {
        assert_eq!(PointerKind::from_raw(3), PointerKind::Pen);
        assert_eq!(PointerKind::from_raw(2), PointerKind::Touch);
        assert_eq!(PointerKind::from_raw(4), PointerKind::Mouse);
        assert_eq!(PointerKind::from_raw(42), PointerKind::Unknown(42));
    }

    #[test]
    fn only_pens_classify_as_pen() {
        assert_eq!(classify(&Fixed(Some(PointerKind::Pen)), 1), Classification::Pen);
        for kind in [
            PointerKind::Pointer,
            PointerKind::Touch,
            PointerKind::Mouse,
            PointerKind::Touchpad,
            PointerKind::Unknown(0),
        ] {
            assert_eq!(classify(&Fixed(Some(kind)), 1), Classification::Other(kind));
        }
    }

    #[test]
    fn unresolvable_pointer_is_lookup_failure() {
        assert_eq!(classify(&Fixed(None), 7), Classification::LookupFailed);
    }
}
