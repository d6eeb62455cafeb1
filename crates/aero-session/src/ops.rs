//! Remote-driven orchestrator operations.
//!
//! Every operation follows the same shape: gate check, client-side
//! validation, one awaited service call, then state and sink updates.
//! Failures leave prior state untouched; nothing is retried.

use aero_core::{
    assemble_report, audit_entry, parse_obstacles, AnalysisResult, AnalysisTarget, BatchResultRow,
    Report, SurfaceDefinitionRequest, SurfaceFamily, ValidationError,
};
use aero_sdk::analysis::ExportFormat;
use aero_sdk::{AeroClient, AirportEntry, NavaidEntry};
use aero_viewer::{draw_surfaces, render_batch_results, RenderSink};
use chrono::Utc;

use crate::audit::spawn_audit_write;
use crate::error::SessionError;
use crate::session::Session;

impl Session {
    /// Log in and load the account's profile and saved surfaces.
    pub async fn login(
        &mut self,
        client: &mut AeroClient,
        username: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        client.login(username, password).await?;
        self.load_profile(client).await
    }

    /// Fetch the profile and saved surfaces for the current credential.
    pub async fn load_profile(&mut self, client: &AeroClient) -> Result<(), SessionError> {
        let account = client.me().await?;
        tracing::info!(username = %account.username, premium = account.is_premium, "profile loaded");
        self.adopt_account(account);
        let surfaces = client.list_surfaces().await?;
        self.store.replace_all(surfaces);
        Ok(())
    }

    /// Define a new surface: gate, validate, create remotely, record, draw.
    ///
    /// Returns the new surface's id. A service refusal (quota, field
    /// rejection) is surfaced verbatim and changes nothing locally.
    pub async fn define_surface(
        &mut self,
        client: &AeroClient,
        sink: &dyn RenderSink,
        request: SurfaceDefinitionRequest,
    ) -> Result<String, SessionError> {
        if request.family() == SurfaceFamily::Custom && !self.capabilities().can_define_custom {
            return Err(ValidationError::PremiumRequired("custom surfaces").into());
        }
        request.validate()?;

        let surface = client.create_surface(&request).await?;
        let id = surface.id.clone();
        tracing::info!(surface = %id, airport = %surface.airport_name, "surface created");

        draw_surfaces(sink, &[&surface], self.display_mode);
        self.record_surface(surface);
        Ok(id)
    }

    /// Delete a surface. The caller has already confirmed the action.
    pub async fn delete_surface(
        &mut self,
        client: &AeroClient,
        surface_id: &str,
    ) -> Result<(), SessionError> {
        client.delete_surface(surface_id).await?;
        self.store.remove(surface_id);
        if let Some(AnalysisTarget::Surface { surface_id: selected }) = &self.target {
            if selected == surface_id {
                self.target = None;
            }
        }
        Ok(())
    }

    /// Analyze the current obstacle position against the selected target.
    pub async fn analyze(&self, client: &AeroClient) -> Result<AnalysisResult, SessionError> {
        let target = self.target.as_ref().ok_or(ValidationError::NoTarget)?;
        Ok(client.analyze(self.obstacle, target).await?)
    }

    /// Run the batch pipeline: parse, gate, submit, render, retain.
    pub async fn batch_analyze(
        &mut self,
        client: &AeroClient,
        sink: &dyn RenderSink,
        input: &str,
    ) -> Result<&[BatchResultRow], SessionError> {
        if !self.capabilities().can_batch_analyze {
            return Err(ValidationError::PremiumRequired("batch analysis").into());
        }
        let obstacles = parse_obstacles(input);
        if obstacles.is_empty() {
            return Err(ValidationError::EmptyBatch.into());
        }
        let target = self.target.as_ref().ok_or(ValidationError::NoTarget)?;

        let rows = client.analyze_batch(&obstacles, target).await?;
        render_batch_results(sink, &rows);
        self.last_batch = rows;
        Ok(&self.last_batch)
    }

    /// Download a surface export (premium-gated client-side as well).
    pub async fn export_surface(
        &self,
        client: &AeroClient,
        surface_id: &str,
        format: ExportFormat,
    ) -> Result<Vec<u8>, SessionError> {
        if !self.capabilities().can_export {
            return Err(ValidationError::PremiumRequired("3D export").into());
        }
        Ok(client.export_surface(surface_id, format).await?)
    }

    /// Search the airport catalog (premium-gated).
    pub async fn search_airports(
        &self,
        client: &AeroClient,
        query: &str,
    ) -> Result<Vec<AirportEntry>, SessionError> {
        if !self.capabilities().can_search_database {
            return Err(ValidationError::PremiumRequired("database search").into());
        }
        Ok(client.search_airports(query).await?)
    }

    /// Search the navaid catalog (premium-gated).
    pub async fn search_navaids(
        &self,
        client: &AeroClient,
        query: &str,
    ) -> Result<Vec<NavaidEntry>, SessionError> {
        if !self.capabilities().can_search_database {
            return Err(ValidationError::PremiumRequired("database search").into());
        }
        Ok(client.search_navaids(query).await?)
    }

    /// Assemble a report from one analysis result and, for premium
    /// accounts, append an audit record without blocking report delivery.
    ///
    /// Must be called from within a tokio runtime: the audit append is
    /// spawned onto the ambient runtime and its outcome never reaches the
    /// caller.
    pub fn build_report(
        &self,
        client: &AeroClient,
        result: &AnalysisResult,
        logo_natural: Option<(f64, f64)>,
    ) -> Report {
        let report = assemble_report(result, self.obstacle, Utc::now(), logo_natural);

        if self.tier().is_premium() {
            let entry = audit_entry(
                result,
                self.obstacle,
                self.audit_airport_name(result),
                self.owner(),
                report.generated_at,
            );
            spawn_audit_write(client.clone(), entry);
        }

        report
    }

    fn audit_airport_name(&self, result: &AnalysisResult) -> String {
        match self.target() {
            Some(AnalysisTarget::Airport { airport_name }) => airport_name.clone(),
            Some(AnalysisTarget::Surface { surface_id }) => self
                .store
                .get(surface_id)
                .map(|s| s.airport_name.clone())
                .unwrap_or_else(|| result.limiting_surface.clone()),
            None => result.limiting_surface.clone(),
        }
    }
}
