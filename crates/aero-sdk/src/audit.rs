//! Append-only audit log endpoints (premium-gated).

use crate::client::AeroClient;
use crate::error::SdkError;
use aero_core::AuditLogEntry;

impl AeroClient {
    /// Append one audit record. Callers treat this as best-effort.
    pub async fn append_audit(&self, entry: &AuditLogEntry) -> Result<(), SdkError> {
        self.require_token()?;
        let url = format!("{}/audit-log", self.base_url);
        let response = self.authed(self.client.post(&url)).json(entry).send().await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        Ok(())
    }

    /// Read recent audit records for the current account.
    pub async fn read_audit(&self) -> Result<Vec<AuditLogEntry>, SdkError> {
        self.require_token()?;
        let url = format!("{}/audit-log", self.base_url);
        let response = self.authed(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        Ok(response.json().await?)
    }
}
