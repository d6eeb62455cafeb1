//! Airport and navaid catalog search.
//!
//! The catalog reports altitudes in feet; the conversion helpers here are
//! the only path from a catalog entry into request coordinates, so nothing
//! in feet ever crosses the request boundary.

use crate::client::AeroClient;
use crate::error::SdkError;
use aero_core::{feet_to_meters, Coord};
use serde::{Deserialize, Serialize};

/// One runway end pair from the airport catalog. Elevations are feet and
/// may be absent for minor fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwayEntry {
    pub le_ident: String,
    pub he_ident: String,
    pub le_latitude_deg: f64,
    pub le_longitude_deg: f64,
    #[serde(default)]
    pub le_elevation_ft: Option<f64>,
    pub he_latitude_deg: f64,
    pub he_longitude_deg: f64,
    #[serde(default)]
    pub he_elevation_ft: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportEntry {
    pub ident: String,
    pub name: String,
    /// Aerodrome reference point elevation, feet
    #[serde(default)]
    pub alt_ft: Option<f64>,
    pub runways: Vec<RunwayEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavaidEntry {
    pub ident: String,
    pub name: String,
    #[serde(rename = "type")]
    pub facility: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub alt_ft: Option<f64>,
}

impl AirportEntry {
    /// ARP altitude in meters, 2 dp.
    pub fn arp_alt_m(&self) -> f64 {
        feet_to_meters(self.alt_ft.unwrap_or(0.0))
    }

    /// Both runway thresholds in request units. Missing runway-end
    /// elevations fall back to the aerodrome reference altitude.
    pub fn thresholds(&self, runway: &RunwayEntry) -> (Coord, Coord) {
        let fallback_ft = self.alt_ft.unwrap_or(0.0);
        let t1 = Coord {
            lat: runway.le_latitude_deg,
            lon: runway.le_longitude_deg,
            alt: feet_to_meters(runway.le_elevation_ft.unwrap_or(fallback_ft)),
        };
        let t2 = Coord {
            lat: runway.he_latitude_deg,
            lon: runway.he_longitude_deg,
            alt: feet_to_meters(runway.he_elevation_ft.unwrap_or(fallback_ft)),
        };
        (t1, t2)
    }
}

impl NavaidEntry {
    /// Antenna position in request units.
    pub fn antenna(&self) -> Coord {
        Coord {
            lat: self.lat,
            lon: self.lon,
            alt: feet_to_meters(self.alt_ft.unwrap_or(0.0)),
        }
    }
}

impl AeroClient {
    /// Search the airport catalog by ICAO ident or name.
    pub async fn search_airports(&self, query: &str) -> Result<Vec<AirportEntry>, SdkError> {
        let url = format!("{}/search/airports", self.base_url);
        let response = self
            .authed(self.client.get(&url))
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        Ok(response.json().await?)
    }

    /// Search the navaid catalog by ident or name.
    pub async fn search_navaids(&self, query: &str) -> Result<Vec<NavaidEntry>, SdkError> {
        let url = format!("{}/search/navaids", self.base_url);
        let response = self
            .authed(self.client.get(&url))
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport() -> AirportEntry {
        AirportEntry {
            ident: "EGLL".to_string(),
            name: "Heathrow".to_string(),
            alt_ft: Some(83.0),
            runways: vec![RunwayEntry {
                le_ident: "09L".to_string(),
                he_ident: "27R".to_string(),
                le_latitude_deg: 51.4775,
                le_longitude_deg: -0.4897,
                le_elevation_ft: Some(75.0),
                he_latitude_deg: 51.4777,
                he_longitude_deg: -0.4332,
                he_elevation_ft: None,
            }],
        }
    }

    #[test]
    fn test_thresholds_are_meters_two_decimals() {
        let airport = airport();
        let (t1, t2) = airport.thresholds(&airport.runways[0]);
        assert_eq!(t1.alt, 22.86); // 75 ft
        // Missing he elevation falls back to the 83 ft ARP
        assert_eq!(t2.alt, 25.3);
        assert_eq!(airport.arp_alt_m(), 25.3);
    }

    #[test]
    fn test_navaid_antenna_converts_feet() {
        let navaid = NavaidEntry {
            ident: "LON".to_string(),
            name: "London".to_string(),
            facility: "DME".to_string(),
            lat: 51.47,
            lon: -0.45,
            alt_ft: Some(100.0),
        };
        assert_eq!(navaid.antenna().alt, 30.48);
    }
}
