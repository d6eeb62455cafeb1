//! Surface families, parameter schemas, and the definition request builder.
//!
//! Each family carries exactly its required fields as a tagged union, so the
//! validator can switch exhaustively and no family is left unchecked.

use crate::account::Owner;
use crate::batch::split_point_row;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// A geodetic position: degrees for lat/lon, meters for altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

/// Closed enumeration of obstacle-limitation surface families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SurfaceFamily {
    /// Annex 14 obstacle limitation surfaces
    Ols,
    /// PANS-OPS obstacle assessment surfaces (legacy, same shape as OLS)
    Oas,
    /// Visual segment surface
    Vss,
    /// Obstacle-free zone
    Ofz,
    /// Navigation-aid restrictive surfaces
    Navaid,
    /// Operator-supplied polygon outline
    Custom,
}

/// Runway approach category shared by OLS and OFZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunwayType {
    NonInstrument,
    NonPrecision,
    Precision,
}

/// Navaid facility taxonomy (EUR Doc 015).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityType {
    #[serde(rename = "CVOR")]
    Cvor,
    #[serde(rename = "DVOR")]
    Dvor,
    #[serde(rename = "DF")]
    Df,
    #[serde(rename = "DME")]
    Dme,
    #[serde(rename = "NDB")]
    Ndb,
    #[serde(rename = "ILS_LLZ")]
    IlsLlz,
    #[serde(rename = "ILS_GP")]
    IlsGp,
    #[serde(rename = "MLS")]
    Mls,
}

impl FacilityType {
    /// Directional facilities require an operational bearing and a reference
    /// threshold; omnidirectional facilities must omit both.
    pub fn is_directional(self) -> bool {
        matches!(self, FacilityType::IlsLlz | FacilityType::IlsGp | FacilityType::Mls)
    }
}

/// Aeroplane design group for OFZ sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignGroup {
    I,
    IIA,
    IIB,
    IIC,
    III,
    IV,
    V,
}

/// One vertex of a custom surface outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPoint {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VssParams {
    pub strip_width_m: f64,
    pub oca_m: f64,
    pub descent_angle_deg: f64,
}

/// Bearing and reference threshold for directional navaids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavaidAlignment {
    pub bearing_deg: f64,
    pub threshold: Coord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavaidParams {
    pub facility_type: FacilityType,
    pub antenna: Coord,
    /// Required for directional facilities, forbidden otherwise
    pub alignment: Option<NavaidAlignment>,
}

/// Family-specific parameter set, one variant per family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "UPPERCASE")]
pub enum FamilyParams {
    Ols {
        runway_type: RunwayType,
    },
    Oas {
        runway_type: RunwayType,
    },
    Ofz {
        runway_type: RunwayType,
        design_group: DesignGroup,
    },
    Vss(VssParams),
    Navaid(NavaidParams),
    Custom {
        points: Vec<CustomPoint>,
    },
}

impl FamilyParams {
    pub fn family(&self) -> SurfaceFamily {
        match self {
            FamilyParams::Ols { .. } => SurfaceFamily::Ols,
            FamilyParams::Oas { .. } => SurfaceFamily::Oas,
            FamilyParams::Ofz { .. } => SurfaceFamily::Ofz,
            FamilyParams::Vss(_) => SurfaceFamily::Vss,
            FamilyParams::Navaid(_) => SurfaceFamily::Navaid,
            FamilyParams::Custom { .. } => SurfaceFamily::Custom,
        }
    }
}

/// Client-side rejection, raised before any network call.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("surface name must not be empty")]
    EmptyName,
    #[error("descent angle must be positive, got {0}")]
    NonPositiveDescentAngle(f64),
    #[error("directional facility {0:?} requires bearing and reference threshold")]
    MissingAlignment(FacilityType),
    #[error("omnidirectional facility {0:?} must not carry bearing or threshold")]
    UnexpectedAlignment(FacilityType),
    #[error("custom surface input contained no valid points")]
    NoCustomPoints,
    #[error("{0} requires a premium account")]
    PremiumRequired(&'static str),
    #[error("no target selected for analysis")]
    NoTarget,
    #[error("obstacle input contained no valid rows")]
    EmptyBatch,
}

/// Family-specific input bundle for surface creation.
///
/// All coordinates are degrees and all altitudes meters at this boundary;
/// feet sources must be converted before a value lands here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDefinitionRequest {
    pub name: String,
    pub airport_name: String,
    pub t1: Coord,
    pub t2: Coord,
    pub arp_alt_m: f64,
    pub params: FamilyParams,
}

impl SurfaceDefinitionRequest {
    pub fn family(&self) -> SurfaceFamily {
        self.params.family()
    }

    /// Validate the family schema. The server re-validates; any field-level
    /// rejection from it is authoritative and surfaced verbatim.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        match &self.params {
            FamilyParams::Ols { .. } | FamilyParams::Oas { .. } | FamilyParams::Ofz { .. } => {
                Ok(())
            }
            FamilyParams::Vss(vss) => {
                if vss.descent_angle_deg <= 0.0 {
                    Err(ValidationError::NonPositiveDescentAngle(vss.descent_angle_deg))
                } else {
                    Ok(())
                }
            }
            FamilyParams::Navaid(navaid) => {
                match (navaid.facility_type.is_directional(), &navaid.alignment) {
                    (true, None) => Err(ValidationError::MissingAlignment(navaid.facility_type)),
                    (false, Some(_)) => {
                        Err(ValidationError::UnexpectedAlignment(navaid.facility_type))
                    }
                    _ => Ok(()),
                }
            }
            FamilyParams::Custom { points } => {
                if points.is_empty() {
                    Err(ValidationError::NoCustomPoints)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Assemble the wire body for the create-surface endpoint.
    pub fn to_wire(&self) -> serde_json::Value {
        let mut body = json!({
            "name": self.name,
            "airport_name": self.airport_name,
            "surface_family": self.family(),
            "t1": self.t1,
            "t2": self.t2,
            "arp_alt": self.arp_alt_m,
        });

        let obj = body.as_object_mut().expect("wire body is an object");
        match &self.params {
            FamilyParams::Ols { runway_type } | FamilyParams::Oas { runway_type } => {
                obj.insert("runway_type".into(), json!(runway_type));
            }
            FamilyParams::Ofz { runway_type, design_group } => {
                obj.insert("runway_type".into(), json!(runway_type));
                obj.insert("adg".into(), json!(design_group));
            }
            FamilyParams::Vss(vss) => {
                obj.insert(
                    "vss_params".into(),
                    json!({
                        "strip_width": vss.strip_width_m,
                        "oca": vss.oca_m,
                        "descent_angle": vss.descent_angle_deg,
                    }),
                );
            }
            FamilyParams::Navaid(navaid) => {
                let mut params = json!({
                    "n_type": navaid.facility_type,
                    "lat": navaid.antenna.lat,
                    "lon": navaid.antenna.lon,
                    "alt": navaid.antenna.alt,
                });
                if let Some(alignment) = &navaid.alignment {
                    let params = params.as_object_mut().expect("navaid params object");
                    params.insert("bearing".into(), json!(alignment.bearing_deg));
                    params.insert("thr_lat".into(), json!(alignment.threshold.lat));
                    params.insert("thr_lon".into(), json!(alignment.threshold.lon));
                    params.insert("thr_alt".into(), json!(alignment.threshold.alt));
                }
                obj.insert("navaid_params".into(), params);
            }
            FamilyParams::Custom { points } => {
                obj.insert("custom_coords".into(), json!(points));
            }
        }

        body
    }
}

/// Parse free-text custom-surface rows of `id, lat, lon, alt`.
///
/// Malformed rows are dropped silently; the submission as a whole is only
/// rejected when nothing parses (see `ValidationError::NoCustomPoints`).
pub fn parse_custom_points(text: &str) -> Vec<CustomPoint> {
    text.lines()
        .filter_map(split_point_row)
        .map(|(id, lat, lon, alt)| CustomPoint { id, lat, lon, alt })
        .collect()
}

/// One named, colored polygon outline of a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryMesh {
    pub name: String,
    /// CSS color string as produced by the geometry service
    pub color: String,
    /// Ordered [lon, lat, alt] vertices
    pub coords: Vec<[f64; 3]>,
}

/// A created surface as returned by the service. Immutable once created;
/// redefinition produces a new surface with a new id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub id: String,
    pub airport_name: String,
    #[serde(default)]
    pub owner: Owner,
    pub name: String,
    pub family: SurfaceFamily,
    pub geometry: Vec<GeometryMesh>,
}
