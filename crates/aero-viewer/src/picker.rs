//! Map-pick listener lifecycle for the obstacle position.
//!
//! The listener is attached only while the analysis view is active. Detach
//! is synchronous and total: once detached, a click delivers nothing - a
//! stale listener mutating a no-longer-visible obstacle position is a
//! correctness bug, not just a leak.

use crate::sink::RenderSink;
use crate::sync::set_obstacle_marker;

/// A ground pick from the map canvas, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickEvent {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Default)]
pub struct ObstaclePicker {
    attached: bool,
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

impl ObstaclePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Process one click. While attached, replaces the obstacle marker and
    /// returns the rounded position; while detached, does nothing.
    pub fn handle_click(&self, event: PickEvent, sink: &dyn RenderSink) -> Option<(f64, f64)> {
        if !self.attached {
            return None;
        }
        let lat = round6(event.lat);
        let lon = round6(event.lon);
        set_obstacle_marker(sink, lat, lon, 0.0);
        Some((lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySink;
    use crate::sync::OBSTACLE_MARKER_ID;

    #[test]
    fn test_click_while_attached_updates_marker() {
        let sink = MemorySink::new();
        let mut picker = ObstaclePicker::new();
        picker.attach();

        let update = picker.handle_click(
            PickEvent {
                lat: 51.4753218765,
                lon: -0.4412349876,
            },
            &sink,
        );
        assert_eq!(update, Some((51.475322, -0.441235)));
        assert!(sink.marker(OBSTACLE_MARKER_ID).is_some());
    }

    #[test]
    fn test_click_after_detach_produces_no_update() {
        let sink = MemorySink::new();
        let mut picker = ObstaclePicker::new();
        picker.attach();
        picker.detach();

        let update = picker.handle_click(PickEvent { lat: 51.5, lon: -0.4 }, &sink);
        assert_eq!(update, None);
        assert!(sink.marker(OBSTACLE_MARKER_ID).is_none());
        assert!(sink.markers().is_empty());
    }
}
