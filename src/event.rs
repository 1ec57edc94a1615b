//! Pen events and their wire payload.
//!
//! penhook represents every accepted pen contact as a single [`PointerEvent`]:
//! a contact transition ([`EventKind`]) plus normalized telemetry.
//!
//! ## Value conventions
//! - **Position:** window client coordinates, in pixels, as `f64`.
//! - **Pressure:** normalized to `[0.0, 1.0]` against the configured hardware
//!   maximum (1024 by default). Devices reporting a larger range can exceed `1.0`;
//!   values are not clamped.
//! - **Tilt:** each axis normalized to `[-1.0, 1.0]` against the ±90° hardware range.
//!
//! ## Payload
//! The payload handed to a transport is a flat map with fixed field names:
//! `type` (`"down" | "move" | "up"`), `x`, `y`, `pressure`, `tiltX`, `tiltY`.
//! [`PointerEvent::to_payload`] produces it.

use serde::{Deserialize, Serialize};

/// Contact transition of a published pen event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// The pen is touching the surface.
    Down,
    /// The pen is hovering (in range, not in contact).
    Move,
    /// The pen left the surface.
    Up,
}

impl EventKind {
    /// Derive the event kind from the message transition and the contact flag.
    ///
    /// An up transition is always [`EventKind::Up`], whatever the contact flag says.
    pub fn from_transition(transition: Transition, in_contact: bool) -> Self {
        match transition {
            Transition::Up => EventKind::Up,
            Transition::Down | Transition::Update if in_contact => EventKind::Down,
            Transition::Down | Transition::Update => EventKind::Move,
        }
    }

    /// Wire name used in the payload `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Down => "down",
            EventKind::Move => "move",
            EventKind::Up => "up",
        }
    }
}

/// Which pointer message triggered an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// `WM_POINTERDOWN`
    Down,
    /// `WM_POINTERUPDATE`
    Update,
    /// `WM_POINTERUP`
    Up,
}

/// Normalized pen event published to the subscriber.
///
/// Only ever built for pointers classified as pens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub x: f64,
    pub y: f64,
    pub pressure: f64,
    #[serde(rename = "tiltX")]
    pub tilt_x: f64,
    #[serde(rename = "tiltY")]
    pub tilt_y: f64,
}

impl PointerEvent {
    /// Encode this event as the structured payload map.
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.kind.as_str(),
            "x": self.x,
            "y": self.y,
            "pressure": self.pressure,
            "tiltX": self.tilt_x,
            "tiltY": self.tilt_y,
        })
    }
}
