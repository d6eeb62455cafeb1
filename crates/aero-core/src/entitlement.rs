//! Feature availability and quota limits per account tier.

use crate::account::Tier;
use serde::{Deserialize, Serialize};

/// What the current tier is allowed to do.
///
/// Consulted before enabling any premium-only control and before issuing a
/// request whose rejection would be silently confusing. Never performs I/O;
/// the server re-checks everything and its refusal is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub can_search_database: bool,
    pub can_batch_analyze: bool,
    pub can_export: bool,
    pub can_define_custom: bool,
    /// Maximum number of distinct airport groupings in the store
    pub max_airports: usize,
}

/// Compute the capability set for a tier.
pub fn capabilities(tier: Tier) -> Capabilities {
    match tier {
        Tier::Guest | Tier::Free => Capabilities {
            can_search_database: false,
            can_batch_analyze: false,
            can_export: false,
            can_define_custom: false,
            max_airports: 1,
        },
        Tier::Premium => Capabilities {
            can_search_database: true,
            can_batch_analyze: true,
            can_export: true,
            can_define_custom: true,
            max_airports: 10,
        },
    }
}
