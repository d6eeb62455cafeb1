//! Report assembly from a single analysis result.

use crate::account::Owner;
use crate::analysis::AnalysisResult;
use crate::surface::Coord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized logo height in layout units; width follows the natural
/// aspect ratio.
const LOGO_HEIGHT: f64 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Determination {
    Allowed,
    Denied,
}

impl Determination {
    pub fn from_penetration(penetration: bool) -> Self {
        if penetration {
            Determination::Denied
        } else {
            Determination::Allowed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLogo {
    pub url: String,
    pub width: f64,
    pub height: f64,
}

impl ReportLogo {
    /// Scale natural dimensions to the normalized height, preserving aspect.
    pub fn from_natural(url: impl Into<String>, natural_w: f64, natural_h: f64) -> Self {
        let ratio = natural_w / natural_h;
        Self {
            url: url.into(),
            width: LOGO_HEIGHT * ratio,
            height: LOGO_HEIGHT,
        }
    }
}

/// One table row per evaluated surface.
///
/// The margin is recomputed per row (`allowed_alt - obstacle_alt`) so each
/// row is self-consistent even when the limiting surface differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub surface_name: String,
    pub allowed_alt: f64,
    pub margin: f64,
}

/// Fixed-layout report payload. Page styling and PDF serialization are the
/// document layer's concern, not assembled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub authority_name: Option<String>,
    pub logo: Option<ReportLogo>,
    pub limiting_surface: String,
    pub obstacle: Coord,
    pub determination: Determination,
    pub allowed_alt: f64,
    pub margin: f64,
    pub rows: Vec<ReportRow>,
}

/// Assemble the report for one analysis result.
///
/// `logo_natural` carries the logo image's natural pixel dimensions when the
/// caller has loaded it; without them no logo is emitted.
pub fn assemble_report(
    result: &AnalysisResult,
    obstacle: Coord,
    generated_at: DateTime<Utc>,
    logo_natural: Option<(f64, f64)>,
) -> Report {
    let logo = match (&result.authority_logo, logo_natural) {
        (Some(url), Some((w, h))) => Some(ReportLogo::from_natural(url.clone(), w, h)),
        _ => None,
    };

    let rows = result
        .all_surfaces
        .iter()
        .map(|s| ReportRow {
            surface_name: s.surface_name.clone(),
            allowed_alt: s.allowed_alt,
            margin: s.allowed_alt - result.obstacle_alt,
        })
        .collect();

    Report {
        title: "Obstacle Limitation Analysis".to_string(),
        generated_at,
        authority_name: result.authority_name.clone(),
        logo,
        limiting_surface: result.limiting_surface.clone(),
        obstacle,
        determination: Determination::from_penetration(result.penetration),
        allowed_alt: result.allowed_alt,
        margin: result.margin,
        rows,
    }
}

/// Append-only audit record, written only for premium accounts and only on
/// a best-effort basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub timestamp: DateTime<Utc>,
    pub airport_name: String,
    pub owner: Owner,
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    pub limiting_surface: String,
    pub margin: f64,
    pub penetration: bool,
}

/// Build the audit entry matching a report.
pub fn audit_entry(
    result: &AnalysisResult,
    obstacle: Coord,
    airport_name: impl Into<String>,
    owner: Owner,
    timestamp: DateTime<Utc>,
) -> AuditLogEntry {
    AuditLogEntry {
        timestamp,
        airport_name: airport_name.into(),
        owner,
        lat: obstacle.lat,
        lon: obstacle.lon,
        alt: obstacle.alt,
        limiting_surface: result.limiting_surface.clone(),
        margin: result.margin,
        penetration: result.penetration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SurfaceClearance;

    fn result() -> AnalysisResult {
        AnalysisResult {
            obstacle_alt: 50.0,
            limiting_surface: "Approach".to_string(),
            allowed_alt: 45.0,
            margin: -5.0,
            penetration: true,
            all_surfaces: vec![
                SurfaceClearance {
                    surface_name: "Approach".to_string(),
                    allowed_alt: 45.0,
                },
                SurfaceClearance {
                    surface_name: "Inner Horizontal".to_string(),
                    allowed_alt: 70.0,
                },
            ],
            authority_name: Some("CAA".to_string()),
            authority_logo: Some("https://caa.example/logo.png".to_string()),
        }
    }

    fn obstacle() -> Coord {
        Coord {
            lat: 51.475,
            lon: -0.44,
            alt: 50.0,
        }
    }

    #[test]
    fn test_negative_margin_is_denied() {
        let report = assemble_report(&result(), obstacle(), Utc::now(), None);
        assert_eq!(report.determination, Determination::Denied);
        assert_eq!(report.margin, -5.0);
    }

    #[test]
    fn test_positive_margin_is_allowed() {
        let mut clear = result();
        clear.obstacle_alt = 40.0;
        clear.margin = 5.0;
        clear.penetration = false;
        let report = assemble_report(&clear, obstacle(), Utc::now(), None);
        assert_eq!(report.determination, Determination::Allowed);
    }

    #[test]
    fn test_row_margins_recomputed_independently() {
        let report = assemble_report(&result(), obstacle(), Utc::now(), None);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].margin, -5.0);
        // Non-limiting surface gets its own margin, not the top-level one
        assert_eq!(report.rows[1].margin, 20.0);
    }

    #[test]
    fn test_logo_preserves_aspect_ratio() {
        let report = assemble_report(&result(), obstacle(), Utc::now(), Some((200.0, 100.0)));
        let logo = report.logo.expect("logo present");
        assert_eq!(logo.height, 48.0);
        assert_eq!(logo.width, 96.0);

        // No natural dimensions means no logo even when the URL exists
        let report = assemble_report(&result(), obstacle(), Utc::now(), None);
        assert!(report.logo.is_none());
    }

    #[test]
    fn test_audit_entry_mirrors_result() {
        let entry = audit_entry(&result(), obstacle(), "EGLL", Owner::Account(3), Utc::now());
        assert_eq!(entry.airport_name, "EGLL");
        assert_eq!(entry.owner, Owner::Account(3));
        assert_eq!(entry.limiting_surface, "Approach");
        assert!(entry.penetration);
        assert_eq!(entry.margin, -5.0);
    }
}
