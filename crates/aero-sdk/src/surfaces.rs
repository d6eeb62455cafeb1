//! Surface lifecycle endpoints.

use crate::client::AeroClient;
use crate::error::SdkError;
use aero_core::{Surface, SurfaceDefinitionRequest, SurfaceFamily};
use serde::{Deserialize, Serialize};

/// A verified public surface as returned by the text search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicSurface {
    pub id: String,
    pub name: String,
    pub family: SurfaceFamily,
}

impl AeroClient {
    /// Create a surface from a validated definition request.
    ///
    /// The service computes and returns the 3D geometry; quota refusals come
    /// back as `SdkError::Service` with the server's message.
    pub async fn create_surface(
        &self,
        request: &SurfaceDefinitionRequest,
    ) -> Result<Surface, SdkError> {
        let url = format!("{}/create-surface", self.base_url);
        let response = self
            .authed(self.client.post(&url))
            .json(&request.to_wire())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        let surface: Surface = response.json().await?;
        tracing::debug!(surface = %surface.id, meshes = surface.geometry.len(), "create-surface accepted");
        Ok(surface)
    }

    /// List surfaces owned by the current account.
    pub async fn list_surfaces(&self) -> Result<Vec<Surface>, SdkError> {
        self.require_token()?;
        let url = format!("{}/get-surfaces", self.base_url);
        let response = self.authed(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        Ok(response.json().await?)
    }

    /// Delete a surface by id. Ownership is checked server-side.
    pub async fn delete_surface(&self, surface_id: &str) -> Result<(), SdkError> {
        let url = format!("{}/surfaces/{}", self.base_url, surface_id);
        let response = self.authed(self.client.delete(&url)).send().await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        Ok(())
    }

    /// Search public/verified surfaces by free text.
    pub async fn search_public_surfaces(&self, query: &str) -> Result<Vec<PublicSurface>, SdkError> {
        let url = format!("{}/search/public-surfaces", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        Ok(response.json().await?)
    }
}
