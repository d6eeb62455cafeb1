//! Aeroplanner session orchestrator.
//!
//! Ties the entitlement gate, the surface parameter model, the surface
//! store, the remote service client, and the visualization synchronizer
//! together behind one explicit state object. No ambient globals: every
//! operation takes the session, the sink, and the client it needs.

pub mod audit;
pub mod config;
pub mod error;
pub mod ops;
pub mod session;

pub use config::Config;
pub use error::SessionError;
pub use session::{ActiveView, Session};
