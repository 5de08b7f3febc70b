//! Core domain logic for ReportDesk.
//! This crate is the single source of truth for storage, validation and
//! report-selection invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod selection;
pub mod service;

pub use db::{open_db, open_db_in_memory, Connection, DbError, DbResult, SharedDb};
pub use logging::{default_log_level, init_logging, logging_status, parse_log_level, LogTarget};
pub use model::project::{Project, ProjectDraft, ProjectUpdate};
pub use model::report::{Report, ReportBatch, ReportBatchItem, ReportDraft, ReportTextUpdate};
pub use model::validation::ValidationError;
pub use model::EntityKind;
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::report_repo::{ReportRepository, SqliteReportRepository};
pub use repo::{RepoError, RepoResult};
pub use selection::{
    is_special_report, select_special_reports, word_histogram, SPECIAL_WORD_THRESHOLD,
};
pub use service::error::{ErrorKind, ServiceError, ServiceResult};
pub use service::project_service::ProjectService;
pub use service::report_service::{ReportService, ReportTextChange};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
