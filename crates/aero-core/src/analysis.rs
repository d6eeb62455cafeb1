//! Single-obstacle analysis result types.

use serde::{Deserialize, Serialize};

/// Allowed altitude of one surface above the obstacle's position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceClearance {
    pub surface_name: String,
    pub allowed_alt: f64,
}

/// Verdict for a single obstacle against every surface covering its
/// horizontal position.
///
/// `margin = allowed_alt(limiting) - obstacle_alt`; penetration means the
/// margin is negative for at least one evaluated surface, and
/// `limiting_surface` is the one producing the minimum allowed altitude.
/// The penetration mathematics are server-side; this is an opaque result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub obstacle_alt: f64,
    pub limiting_surface: String,
    pub allowed_alt: f64,
    pub margin: f64,
    pub penetration: bool,
    pub all_surfaces: Vec<SurfaceClearance>,
    #[serde(default)]
    pub authority_name: Option<String>,
    #[serde(default)]
    pub authority_logo: Option<String>,
}

/// What to analyze against: one saved surface or a whole airport grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisTarget {
    Surface { surface_id: String },
    Airport { airport_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_margin_sign_matches_penetration() {
        let violation: AnalysisResult = serde_json::from_value(serde_json::json!({
            "obstacle_alt": 100.0,
            "limiting_surface": "Approach",
            "allowed_alt": 95.0,
            "margin": -5.0,
            "penetration": true,
            "all_surfaces": [{"surface_name": "Approach", "allowed_alt": 95.0}]
        }))
        .unwrap();
        assert!(violation.penetration);
        assert!(violation.margin < 0.0);

        let clear: AnalysisResult = serde_json::from_value(serde_json::json!({
            "obstacle_alt": 90.0,
            "limiting_surface": "Approach",
            "allowed_alt": 95.0,
            "margin": 5.0,
            "penetration": false,
            "all_surfaces": [{"surface_name": "Approach", "allowed_alt": 95.0}]
        }))
        .unwrap();
        assert!(!clear.penetration);
        assert!(clear.margin > 0.0);
    }

    #[test]
    fn test_target_wire_shapes() {
        let by_surface = AnalysisTarget::Surface {
            surface_id: "surf-1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&by_surface).unwrap(),
            serde_json::json!({"surface_id": "surf-1"})
        );

        let by_airport = AnalysisTarget::Airport {
            airport_name: "EGLL".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&by_airport).unwrap(),
            serde_json::json!({"airport_name": "EGLL"})
        );
    }
}
