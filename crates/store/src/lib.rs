//! Read-only data access for the review dashboard.
//!
//! Each domain exposes a repository trait plus an in-memory implementation
//! seeded from [`fixtures`]. Handlers depend on the traits only.

pub mod alerts;
pub mod analysis;
pub mod dashboard;
pub mod fixtures;
pub mod jobs;
pub mod settings;

pub use alerts::memory_repository::MemoryAlertRepository;
pub use analysis::memory_repository::MemoryAnalysisRepository;
pub use dashboard::memory_repository::MemoryDashboardRepository;
pub use settings::memory_repository::MemorySettingsRepository;
