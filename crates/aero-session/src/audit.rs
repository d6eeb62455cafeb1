//! Fire-and-forget audit log writes.

use aero_core::AuditLogEntry;
use aero_sdk::AeroClient;
use tokio::task::JoinHandle;

/// Append an audit record on its own task.
///
/// The write is best-effort: a failure is logged locally and never reaches
/// the caller, so report delivery is never blocked on the audit channel.
pub fn spawn_audit_write(client: AeroClient, entry: AuditLogEntry) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(err) = client.append_audit(&entry).await {
            tracing::warn!("audit log write failed: {}", err);
        }
    })
}
