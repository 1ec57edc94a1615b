//! Raw telemetry to [`PointerEvent`] conversion.

use crate::config::DEFAULT_PRESSURE_MAX;
use crate::event::{EventKind, PointerEvent, Transition};
use crate::pointer::{ClientSpace, RawPenSample};

/// Hardware tilt range, in degrees, on either side of vertical.
const TILT_RANGE_DEGREES: f64 = 90.0;

/// Converts raw pen samples to canonical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalizer {
    pressure_max: f64,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PRESSURE_MAX)
    }
}

impl Normalizer {
    /// `pressure_max` is the raw pressure value that maps to `1.0`.
    pub fn new(pressure_max: f64) -> Self {
        Self { pressure_max }
    }

    pub fn pressure_max(&self) -> f64 {
        self.pressure_max
    }

    /// Build the event for `sample`.
    ///
    /// Pressure is divided by the configured maximum and left unclamped. Tilt is
    /// divided by 90°. The screen position is mapped through `space`. `kind`
    /// comes from the triggering message and its contact flag.
    pub fn normalize(
        &self,
        sample: &RawPenSample,
        transition: Transition,
        in_contact: bool,
        space: &dyn ClientSpace,
    ) -> PointerEvent {
        let client = space.screen_to_client(sample.screen);
        PointerEvent {
            kind: EventKind::from_transition(transition, in_contact),
            x: f64::from(client.x),
            y: f64::from(client.y),
            pressure: f64::from(sample.pressure) / self.pressure_max,
            tilt_x: f64::from(sample.tilt_x) / TILT_RANGE_DEGREES,
            tilt_y: f64::from(sample.tilt_y) / TILT_RANGE_DEGREES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::Point;

    struct Origin(i32, i32);

    impl ClientSpace for Origin {
        fn screen_to_client(&self, p: Point) -> Point {
            Point {
                x: p.x - self.0,
                y: p.y - self.1,
            }
        }
    }

    fn sample(pressure: u32, tilt_x: i32, tilt_y: i32) -> RawPenSample {
        RawPenSample {
            pressure,
            tilt_x,
            tilt_y,
            screen: Point { x: 150, y: 300 },
            in_contact: true,
            ..Default::default()
        }
    }

    #[test]
    fn scales_pressure_tilt_and_position() {
        let event = Normalizer::default().normalize(
            &sample(512, 45, -45),
            Transition::Down,
            true,
            &Origin(50, 50),
        );
        assert_eq!(
            event,
            PointerEvent {
                kind: EventKind::Down,
                x: 100.0,
                y: 250.0,
                pressure: 0.5,
                tilt_x: 0.5,
                tilt_y: -0.5,
            }
        );
    }

    #[test]
    fn tilt_extremes_hit_unit_range() {
        let n = Normalizer::default();
        let max = n.normalize(&sample(0, 90, -90), Transition::Update, false, &Origin(0, 0));
        assert_eq!((max.tilt_x, max.tilt_y), (1.0, -1.0));
        assert_eq!(max.kind, EventKind::Move);
    }

    #[test]
    fn full_scale_pressure_is_one() {
        let event = Normalizer::default().normalize(
            &sample(1024, 0, 0),
            Transition::Update,
            true,
            &Origin(0, 0),
        );
        assert_eq!(event.pressure, 1.0);
    }

    #[test]
    fn pressure_is_not_clamped() {
        // A 2048-level pen read against the default maximum.
        let event = Normalizer::default().normalize(
            &sample(2048, 0, 0),
            Transition::Update,
            true,
            &Origin(0, 0),
        );
        assert_eq!(event.pressure, 2.0);

        let matched = Normalizer::new(2048.0).normalize(
            &sample(2048, 0, 0),
            Transition::Update,
            true,
            &Origin(0, 0),
        );
        assert_eq!(matched.pressure, 1.0);
    }

    #[test]
    fn up_ignores_sample_contact() {
        let event = Normalizer::default().normalize(
            &sample(300, 0, 0),
            Transition::Up,
            true,
            &Origin(0, 0),
        );
        assert_eq!(event.kind, EventKind::Up);
    }
}
