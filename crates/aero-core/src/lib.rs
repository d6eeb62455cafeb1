pub mod account;
pub mod analysis;
pub mod batch;
pub mod entitlement;
pub mod report;
pub mod store;
pub mod surface;
pub mod units;

pub use account::{Account, Owner, Tier};
pub use analysis::{AnalysisResult, AnalysisTarget, SurfaceClearance};
pub use batch::{export_csv, parse_obstacles, BatchObstacle, BatchResultRow};
pub use entitlement::{capabilities, Capabilities};
pub use report::{assemble_report, audit_entry, AuditLogEntry, Determination, Report, ReportRow};
pub use store::SurfaceStore;
pub use surface::{
    parse_custom_points, Coord, CustomPoint, DesignGroup, FacilityType, FamilyParams,
    GeometryMesh, NavaidAlignment, NavaidParams, RunwayType, Surface, SurfaceDefinitionRequest,
    SurfaceFamily, ValidationError, VssParams,
};
pub use units::feet_to_meters;
