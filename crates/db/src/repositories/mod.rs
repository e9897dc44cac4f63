//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods that must share a
//! transaction with a row lock take `&mut PgConnection` instead.

pub mod asset_document_repo;
pub mod asset_repo;
pub mod category_repo;
pub mod dashboard_repo;
pub mod maintenance_log_repo;

pub use asset_document_repo::AssetDocumentRepo;
pub use asset_repo::AssetRepo;
pub use category_repo::CategoryRepo;
pub use dashboard_repo::DashboardRepo;
pub use maintenance_log_repo::MaintenanceLogRepo;
