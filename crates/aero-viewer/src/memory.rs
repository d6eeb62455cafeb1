//! In-memory render sink.
//!
//! Concrete `RenderSink` used by the CLI and by tests; holds the primitive
//! set in thread-safe maps so assertions can inspect exactly what a real
//! engine would have been asked to draw.

use crate::sink::{CameraFrame, MarkerPrimitive, PolygonPrimitive, RenderSink};
use dashmap::DashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemorySink {
    polygons: DashMap<String, PolygonPrimitive>,
    markers: DashMap<String, MarkerPrimitive>,
    last_frame: Mutex<Option<CameraFrame>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polygons(&self) -> Vec<PolygonPrimitive> {
        self.polygons.iter().map(|r| r.value().clone()).collect()
    }

    pub fn markers(&self) -> Vec<MarkerPrimitive> {
        self.markers.iter().map(|r| r.value().clone()).collect()
    }

    pub fn marker(&self, id: &str) -> Option<MarkerPrimitive> {
        self.markers.get(id).map(|r| r.value().clone())
    }

    pub fn last_frame(&self) -> Option<CameraFrame> {
        *self.last_frame.lock().expect("frame lock")
    }
}

impl RenderSink for MemorySink {
    fn add_polygon(&self, polygon: PolygonPrimitive) {
        self.polygons.insert(polygon.id.clone(), polygon);
    }

    fn add_marker(&self, marker: MarkerPrimitive) {
        self.markers.insert(marker.id.clone(), marker);
    }

    fn remove(&self, id: &str) {
        self.polygons.remove(id);
        self.markers.remove(id);
    }

    fn remove_prefixed(&self, prefix: &str) {
        self.polygons.retain(|id, _| !id.starts_with(prefix));
        self.markers.retain(|id, _| !id.starts_with(prefix));
    }

    fn clear_polygons(&self) {
        self.polygons.clear();
    }

    fn clear_all(&self) {
        self.polygons.clear();
        self.markers.clear();
        *self.last_frame.lock().expect("frame lock") = None;
    }

    fn frame(&self, frame: CameraFrame) {
        *self.last_frame.lock().expect("frame lock") = Some(frame);
    }
}
