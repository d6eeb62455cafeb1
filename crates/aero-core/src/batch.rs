//! Batch obstacle parsing and result export.

use serde::{Deserialize, Serialize};

/// One obstacle parsed from a line of `id, lat, lon, alt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchObstacle {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

/// Split one `id, a, b, c` row into its four fields.
///
/// Returns None for anything that is not exactly four comma-separated
/// tokens with numeric tail fields.
pub(crate) fn split_point_row(line: &str) -> Option<(String, f64, f64, f64)> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 4 || parts[0].is_empty() {
        return None;
    }
    let lat = parts[1].parse().ok()?;
    let lon = parts[2].parse().ok()?;
    let alt = parts[3].parse().ok()?;
    Some((parts[0].to_string(), lat, lon, alt))
}

/// Parse free-text obstacle input, one obstacle per line.
///
/// Malformed lines are dropped silently; callers reject the submission only
/// when the whole list comes back empty. Ids should be unique within a batch
/// since results are correlated by id; no de-duplication is attempted.
pub fn parse_obstacles(text: &str) -> Vec<BatchObstacle> {
    text.lines()
        .filter_map(split_point_row)
        .map(|(id, lat, lon, alt)| BatchObstacle { id, lat, lon, alt })
        .collect()
}

/// One per-obstacle verdict from the batch analysis endpoint.
///
/// Result order is not guaranteed to match input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResultRow {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    pub limiting_surface: String,
    #[serde(default)]
    pub allowed_alt: Option<f64>,
    #[serde(default)]
    pub margin: Option<f64>,
    pub penetration: bool,
}

const CSV_HEADER: &str = "ID,Lat,Lon,Alt,Limiting Surface,Max Allowed (m),Margin (m),Violation";

fn sentinel(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// Export a batch result set as a delimited table with a fixed column order.
pub fn export_csv(rows: &[BatchResultRow]) -> String {
    let mut out = String::from(CSV_HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}",
            row.id,
            row.lat,
            row.lon,
            row.alt,
            row.limiting_surface,
            sentinel(row.allowed_alt),
            sentinel(row.margin),
            if row.penetration { "YES" } else { "NO" },
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_malformed_lines() {
        let text = "Crane_1, 51.47, -0.45, 120\nBuilding_A, 51.472, -0.44, 95\nnot a row\nShort, 1.0, 2.0";
        let obstacles = parse_obstacles(text);
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].id, "Crane_1");
        assert_eq!(obstacles[1].alt, 95.0);
    }

    #[test]
    fn test_parse_drops_non_numeric_fields() {
        let obstacles = parse_obstacles("A, north, -0.45, 120\nB, 51.0, -0.4, 10");
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, "B");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_obstacles("").is_empty());
        assert!(parse_obstacles("\n\n").is_empty());
    }

    #[test]
    fn test_csv_export_fixed_columns_and_flags() {
        let rows = vec![
            BatchResultRow {
                id: "Crane_1".to_string(),
                lat: 51.47,
                lon: -0.45,
                alt: 120.0,
                limiting_surface: "Approach".to_string(),
                allowed_alt: Some(95.5),
                margin: Some(-24.5),
                penetration: true,
            },
            BatchResultRow {
                id: "Building_A".to_string(),
                lat: 51.472,
                lon: -0.44,
                alt: 40.0,
                limiting_surface: "Inner Horizontal".to_string(),
                allowed_alt: None,
                margin: None,
                penetration: false,
            },
        ];

        let csv = export_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "ID,Lat,Lon,Alt,Limiting Surface,Max Allowed (m),Margin (m),Violation"
        );
        assert_eq!(lines[1], "Crane_1,51.47,-0.45,120,Approach,95.5,-24.5,YES");
        assert_eq!(
            lines[2],
            "Building_A,51.472,-0.44,40,Inner Horizontal,N/A,N/A,NO"
        );
    }
}
