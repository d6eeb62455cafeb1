//! Primitive types and the render-sink trait.

use serde::{Deserialize, Serialize};

/// CSS color plus alpha for blended fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayColor {
    pub css: String,
    pub alpha: f64,
}

impl DisplayColor {
    pub fn new(css: impl Into<String>, alpha: f64) -> Self {
        Self {
            css: css.into(),
            alpha,
        }
    }
}

/// One filled polygon outline with per-vertex [lon, lat, alt].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub id: String,
    pub name: String,
    pub color: DisplayColor,
    pub outline: bool,
    pub vertices: Vec<[f64; 3]>,
}

/// A point marker with optional label and optional vertical line from the
/// ground to the marker altitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub id: String,
    /// [lon, lat, alt]
    pub position: [f64; 3],
    pub color: DisplayColor,
    pub label: Option<String>,
    pub ground_line: bool,
}

/// Camera reorientation request: frame a center point from a fixed oblique
/// pitch at a fixed range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFrame {
    pub heading_deg: f64,
    pub pitch_deg: f64,
    pub range_m: f64,
    /// [lon, lat, alt] center of the framed bounding volume
    pub center: [f64; 3],
}

/// The rendering engine as the orchestrator sees it: a sink that accepts
/// primitives and honors id-based removal. Drawing is append-only per call;
/// callers clear before drawing a replacement set.
pub trait RenderSink {
    fn add_polygon(&self, polygon: PolygonPrimitive);
    fn add_marker(&self, marker: MarkerPrimitive);
    /// Remove one primitive by id; no-op if absent.
    fn remove(&self, id: &str);
    /// Remove every primitive whose id starts with the prefix.
    fn remove_prefixed(&self, prefix: &str);
    /// Remove all surface polygons, leaving markers untouched.
    fn clear_polygons(&self);
    /// Remove everything (teardown/logout).
    fn clear_all(&self);
    /// Reorient the camera.
    fn frame(&self, frame: CameraFrame);
}
