use crate::event::PointerEvent;
use crate::publisher::InkSink;

/// A simple sink that logs every pen event at `info` level.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        LogSink
    }
}

impl InkSink for LogSink {
    fn on_event(&mut self, event: &PointerEvent) {
        log::info!(
            "[Ink] {} x={:.1} y={:.1} pressure={:.3} tilt=({:.2}, {:.2})",
            event.kind.as_str(),
            event.x,
            event.y,
            event.pressure,
            event.tilt_x,
            event.tilt_y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::publisher::EventPublisher;

    #[test]
    fn log_sink_accepts_events() {
        let publisher = EventPublisher::new();
        publisher.subscribe(LogSink::new());
        publisher.push(&PointerEvent {
            kind: EventKind::Down,
            x: 1.0,
            y: 2.0,
            pressure: 0.25,
            tilt_x: 0.0,
            tilt_y: 0.0,
        });
        assert!(publisher.has_subscriber());
    }
}
