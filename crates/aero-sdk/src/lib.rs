//! Aeroplanner SDK - client for the remote surface and analysis service
//!
//! The service performs authentication, persists surfaces, computes surface
//! geometry, and runs the penetration mathematics; this crate only speaks
//! its request/response contract.

pub mod analysis;
pub mod audit;
pub mod client;
pub mod error;
pub mod search;
pub mod surfaces;

pub use analysis::ExportFormat;
pub use client::AeroClient;
pub use error::SdkError;
pub use search::{AirportEntry, NavaidEntry, RunwayEntry};
pub use surfaces::PublicSurface;
