//! Single, batch, and export analysis endpoints.

use crate::client::AeroClient;
use crate::error::SdkError;
use aero_core::{AnalysisResult, AnalysisTarget, BatchObstacle, BatchResultRow, Coord};
use serde::Deserialize;
use serde_json::json;

/// Export payload formats offered by the service (premium-gated).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Kml,
    Dxf,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Kml => "kml",
            ExportFormat::Dxf => "dxf",
        }
    }
}

#[derive(Debug, Deserialize)]
struct BatchResponse {
    results: Vec<BatchResultRow>,
}

fn merge_target(body: &mut serde_json::Value, target: &AnalysisTarget) {
    let target = serde_json::to_value(target).expect("target serializes");
    if let (Some(obj), Some(extra)) = (body.as_object_mut(), target.as_object()) {
        for (k, v) in extra {
            obj.insert(k.clone(), v.clone());
        }
    }
}

impl AeroClient {
    /// Analyze a single obstacle against the selected target.
    pub async fn analyze(
        &self,
        obstacle: Coord,
        target: &AnalysisTarget,
    ) -> Result<AnalysisResult, SdkError> {
        let url = format!("{}/analyze", self.base_url);
        let mut body = json!({
            "lat": obstacle.lat,
            "lon": obstacle.lon,
            "alt": obstacle.alt,
        });
        merge_target(&mut body, target);

        let response = self.authed(self.client.post(&url)).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        Ok(response.json().await?)
    }

    /// Analyze a whole obstacle list in one request.
    ///
    /// The response carries one row per input obstacle, correlated by id;
    /// result order is not guaranteed to match input order.
    pub async fn analyze_batch(
        &self,
        obstacles: &[BatchObstacle],
        target: &AnalysisTarget,
    ) -> Result<Vec<BatchResultRow>, SdkError> {
        let url = format!("{}/analyze-batch", self.base_url);
        let mut body = json!({ "obstacles": obstacles });
        merge_target(&mut body, target);

        let response = self.authed(self.client.post(&url)).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        let payload: BatchResponse = response.json().await?;
        Ok(payload.results)
    }

    /// Download a surface export as a binary payload (premium-gated).
    pub async fn export_surface(
        &self,
        surface_id: &str,
        format: ExportFormat,
    ) -> Result<Vec<u8>, SdkError> {
        self.require_token()?;
        let url = format!("{}/export/{}/{}", self.base_url, format.as_str(), surface_id);
        let response = self.authed(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        let payload = response.bytes().await?.to_vec();
        tracing::debug!(bytes = payload.len(), format = format.as_str(), "export downloaded");
        Ok(payload)
    }
}
