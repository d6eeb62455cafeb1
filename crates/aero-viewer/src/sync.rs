//! Reconciliation between the surface store, analysis results, and the
//! render sink.

use crate::sink::{CameraFrame, DisplayColor, MarkerPrimitive, PolygonPrimitive, RenderSink};
use aero_core::{BatchResultRow, Surface};

/// Reserved id of the single obstacle marker.
pub const OBSTACLE_MARKER_ID: &str = "obs-marker";
/// Reserved id prefix for batch analysis markers.
pub const BATCH_MARKER_PREFIX: &str = "batch-obs-";

const SURFACE_ALPHA: f64 = 0.4;
const FRAME_HEADING_DEG: f64 = 0.0;
const FRAME_PITCH_DEG: f64 = -45.0;
const FRAME_RANGE_M: f64 = 5000.0;

fn blueprint_color() -> DisplayColor {
    DisplayColor::new("slategray", 0.5)
}

fn penetration_color() -> DisplayColor {
    DisplayColor::new("red", 1.0)
}

fn clear_color() -> DisplayColor {
    DisplayColor::new("lightskyblue", 1.0)
}

/// Global color override for surface polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Each mesh's declared color, alpha-blended
    #[default]
    Natural,
    /// Single neutral color for every polygon
    Blueprint,
}

/// Replace the sink's surface polygons with the given set and frame the
/// camera on their bounding volume.
///
/// Clear-then-draw is the whole policy: there is no incremental diffing
/// against previously rendered geometry. The obstacle marker and batch
/// markers live outside the polygon set and are not touched.
pub fn draw_surfaces(sink: &dyn RenderSink, surfaces: &[&Surface], mode: DisplayMode) {
    sink.clear_polygons();

    let mut bounds = Bounds::default();
    let mut count = 0usize;

    for surface in surfaces {
        for (index, mesh) in surface.geometry.iter().enumerate() {
            let color = match mode {
                DisplayMode::Natural => DisplayColor::new(mesh.color.clone(), SURFACE_ALPHA),
                DisplayMode::Blueprint => blueprint_color(),
            };
            for vertex in &mesh.coords {
                bounds.extend(*vertex);
            }
            sink.add_polygon(PolygonPrimitive {
                id: format!("{}-{}", surface.id, index),
                name: mesh.name.clone(),
                color,
                outline: true,
                vertices: mesh.coords.clone(),
            });
            count += 1;
        }
    }

    tracing::debug!(surfaces = surfaces.len(), polygons = count, "redrew surface set");

    if let Some(center) = bounds.center() {
        sink.frame(CameraFrame {
            heading_deg: FRAME_HEADING_DEG,
            pitch_deg: FRAME_PITCH_DEG,
            range_m: FRAME_RANGE_M,
            center,
        });
    }
}

/// Replace the single obstacle marker at a picked ground position.
pub fn set_obstacle_marker(sink: &dyn RenderSink, lat: f64, lon: f64, alt: f64) {
    sink.remove(OBSTACLE_MARKER_ID);
    sink.add_marker(MarkerPrimitive {
        id: OBSTACLE_MARKER_ID.to_string(),
        position: [lon, lat, alt],
        color: penetration_color(),
        label: None,
        ground_line: false,
    });
}

/// Replace the batch marker set with one marker per result row.
///
/// Only primitives under the reserved prefix are removed; surface polygons
/// and the single obstacle marker stay as they are.
pub fn render_batch_results(sink: &dyn RenderSink, rows: &[BatchResultRow]) {
    sink.remove_prefixed(BATCH_MARKER_PREFIX);

    for row in rows {
        let color = if row.penetration {
            penetration_color()
        } else {
            clear_color()
        };
        let verdict = if row.penetration { "VIOLATION" } else { "CLEAR" };
        sink.add_marker(MarkerPrimitive {
            id: format!("{}{}", BATCH_MARKER_PREFIX, row.id),
            position: [row.lon, row.lat, row.alt],
            color,
            label: Some(format!("{}\n{}", row.id, verdict)),
            ground_line: true,
        });
    }
}

#[derive(Default)]
struct Bounds {
    min: Option<[f64; 3]>,
    max: Option<[f64; 3]>,
}

impl Bounds {
    fn extend(&mut self, point: [f64; 3]) {
        match (&mut self.min, &mut self.max) {
            (Some(min), Some(max)) => {
                for axis in 0..3 {
                    min[axis] = min[axis].min(point[axis]);
                    max[axis] = max[axis].max(point[axis]);
                }
            }
            _ => {
                self.min = Some(point);
                self.max = Some(point);
            }
        }
    }

    fn center(&self) -> Option<[f64; 3]> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some([
                (min[0] + max[0]) / 2.0,
                (min[1] + max[1]) / 2.0,
                (min[2] + max[2]) / 2.0,
            ]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySink;
    use aero_core::{GeometryMesh, Owner, SurfaceFamily};

    fn surface(id: &str, meshes: Vec<GeometryMesh>) -> Surface {
        Surface {
            id: id.to_string(),
            airport_name: "EGLL".to_string(),
            owner: Owner::Guest,
            name: "RWY 09/27".to_string(),
            family: SurfaceFamily::Ols,
            geometry: meshes,
        }
    }

    fn mesh(name: &str, color: &str) -> GeometryMesh {
        GeometryMesh {
            name: name.to_string(),
            color: color.to_string(),
            coords: vec![
                [-0.49, 51.46, 20.0],
                [-0.43, 51.46, 20.0],
                [-0.43, 51.48, 120.0],
            ],
        }
    }

    #[test]
    fn test_draw_replaces_polygon_set_and_frames_camera() {
        let sink = MemorySink::new();
        let first = surface("s1", vec![mesh("Approach", "#ff0000")]);
        draw_surfaces(&sink, &[&first], DisplayMode::Natural);
        assert_eq!(sink.polygons().len(), 1);

        let second = surface("s2", vec![mesh("Approach", "#00ff00"), mesh("Strip", "#0000ff")]);
        draw_surfaces(&sink, &[&second], DisplayMode::Natural);

        let polygons = sink.polygons();
        assert_eq!(polygons.len(), 2);
        assert!(polygons.iter().all(|p| p.id.starts_with("s2-")));

        let frame = sink.last_frame().expect("camera framed");
        assert_eq!(frame.pitch_deg, -45.0);
        assert_eq!(frame.range_m, 5000.0);
        assert!((frame.center[1] - 51.47).abs() < 1e-9);
    }

    #[test]
    fn test_blueprint_mode_overrides_mesh_colors() {
        let sink = MemorySink::new();
        let s = surface("s1", vec![mesh("Approach", "#ff0000"), mesh("Strip", "#00ff00")]);
        draw_surfaces(&sink, &[&s], DisplayMode::Blueprint);

        for polygon in sink.polygons() {
            assert_eq!(polygon.color.css, "slategray");
            assert_eq!(polygon.color.alpha, 0.5);
        }
    }

    #[test]
    fn test_obstacle_marker_replaced_not_accumulated() {
        let sink = MemorySink::new();
        set_obstacle_marker(&sink, 51.475, -0.44, 50.0);
        set_obstacle_marker(&sink, 51.5, -0.4, 60.0);

        assert_eq!(sink.markers().len(), 1);
        let marker = sink.marker(OBSTACLE_MARKER_ID).unwrap();
        assert_eq!(marker.position, [-0.4, 51.5, 60.0]);
    }

    #[test]
    fn test_batch_markers_replaced_without_disturbing_others() {
        let sink = MemorySink::new();
        let s = surface("s1", vec![mesh("Approach", "#ff0000")]);
        draw_surfaces(&sink, &[&s], DisplayMode::Natural);
        set_obstacle_marker(&sink, 51.475, -0.44, 50.0);

        let row = |id: &str, penetration: bool| BatchResultRow {
            id: id.to_string(),
            lat: 51.47,
            lon: -0.45,
            alt: 120.0,
            limiting_surface: "Approach".to_string(),
            allowed_alt: Some(95.0),
            margin: Some(-25.0),
            penetration,
        };

        render_batch_results(&sink, &[row("Crane_1", true), row("Building_A", false)]);
        assert_eq!(sink.markers().len(), 3); // obstacle + 2 batch
        assert_eq!(sink.polygons().len(), 1);

        // Second run fully replaces the prefixed set
        render_batch_results(&sink, &[row("Crane_2", false)]);
        let markers = sink.markers();
        assert_eq!(markers.len(), 2);
        assert!(markers.iter().any(|m| m.id == "batch-obs-Crane_2"));
        assert!(markers.iter().any(|m| m.id == OBSTACLE_MARKER_ID));
        assert_eq!(sink.polygons().len(), 1);
    }

    #[test]
    fn test_batch_marker_colors_follow_verdict() {
        let sink = MemorySink::new();
        let rows = vec![
            BatchResultRow {
                id: "hit".to_string(),
                lat: 0.0,
                lon: 0.0,
                alt: 10.0,
                limiting_surface: "Approach".to_string(),
                allowed_alt: Some(5.0),
                margin: Some(-5.0),
                penetration: true,
            },
            BatchResultRow {
                id: "ok".to_string(),
                lat: 0.0,
                lon: 0.0,
                alt: 1.0,
                limiting_surface: "Approach".to_string(),
                allowed_alt: Some(5.0),
                margin: Some(4.0),
                penetration: false,
            },
        ];
        render_batch_results(&sink, &rows);

        let hit = sink.marker("batch-obs-hit").unwrap();
        assert_eq!(hit.color.css, "red");
        assert!(hit.ground_line);
        let ok = sink.marker("batch-obs-ok").unwrap();
        assert_eq!(ok.color.css, "lightskyblue");
    }
}
