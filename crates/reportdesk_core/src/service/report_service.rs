//! Report use-case service.
//!
//! # Responsibility
//! - Validate report input and delegate persistence to a repository.
//! - Expose the special-report view on top of "read all reports".
//!
//! # Invariants
//! - Batch create validates every entry before the first insert.
//! - Listing reports of a project without reports is an empty success.

use crate::model::report::{Report, ReportBatch, ReportDraft, ReportTextUpdate};
use crate::model::validation::require_id;
use crate::model::EntityKind;
use crate::repo::report_repo::ReportRepository;
use crate::selection::select_special_reports;
use crate::service::error::{ServiceError, ServiceResult};
use log::{debug, info};

/// Applied state of a text replacement, echoed from the caller's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTextChange {
    pub id: String,
    pub text: String,
}

/// Use-case service wrapper for report CRUD operations.
pub struct ReportService<R: ReportRepository> {
    repo: R,
}

impl<R: ReportRepository> ReportService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one report for an existing project.
    pub fn create_report(&self, draft: ReportDraft) -> ServiceResult<Report> {
        let report = draft.validate()?;
        self.repo.insert_report(&report)?;
        info!(
            "event=report_create module=service status=ok report_id={} project_id={}",
            report.id, report.project_id
        );
        Ok(report)
    }

    /// Creates all reports of `batch` under `project_id`, or none of them.
    ///
    /// # Errors
    /// - `Validation` when the batch is empty or any entry is incomplete.
    /// - `NotFound` when the project does not exist.
    /// - `Conflict` when any report id is taken (including duplicates
    ///   inside the batch).
    pub fn create_reports_for_project(
        &mut self,
        project_id: &str,
        batch: ReportBatch,
    ) -> ServiceResult<Vec<Report>> {
        require_id(project_id, EntityKind::Project)?;
        let reports = batch.validate(project_id)?;
        self.repo.insert_reports(project_id, &reports)?;
        info!(
            "event=report_batch_create module=service status=ok project_id={} count={}",
            project_id,
            reports.len()
        );
        Ok(reports)
    }

    pub fn list_reports(&self) -> ServiceResult<Vec<Report>> {
        Ok(self.repo.list_reports()?)
    }

    pub fn list_reports_for_project(&self, project_id: &str) -> ServiceResult<Vec<Report>> {
        require_id(project_id, EntityKind::Project)?;
        Ok(self.repo.list_reports_for_project(project_id)?)
    }

    pub fn get_report(&self, id: &str) -> ServiceResult<Report> {
        require_id(id, EntityKind::Report)?;
        self.repo
            .get_report(id)?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Report, id))
    }

    /// Replaces the text of an existing report.
    pub fn update_report_text(
        &self,
        id: &str,
        update: ReportTextUpdate,
    ) -> ServiceResult<ReportTextChange> {
        require_id(id, EntityKind::Report)?;
        let text = update.validate()?;

        let changed = self.repo.update_report_text(id, &text)?;
        if changed == 0 {
            return Err(ServiceError::not_found(EntityKind::Report, id));
        }

        info!("event=report_update module=service status=ok report_id={id}");
        Ok(ReportTextChange {
            id: id.to_string(),
            text,
        })
    }

    /// Deletes a report; returns the deleted id.
    pub fn delete_report(&self, id: &str) -> ServiceResult<String> {
        require_id(id, EntityKind::Report)?;
        let changed = self.repo.delete_report(id)?;
        if changed == 0 {
            return Err(ServiceError::not_found(EntityKind::Report, id));
        }

        info!("event=report_delete module=service status=ok report_id={id}");
        Ok(id.to_string())
    }

    /// Returns the reports selected by the word-repetition heuristic.
    ///
    /// # Errors
    /// - `NoReports` when the store holds no reports at all.
    /// - `NoSpecialReports` when no report qualifies.
    pub fn special_reports(&self) -> ServiceResult<Vec<Report>> {
        let reports = self.repo.list_reports()?;
        if reports.is_empty() {
            return Err(ServiceError::NoReports);
        }

        let scanned = reports.len();
        let selected = select_special_reports(reports);
        debug!(
            "event=special_reports module=service scanned={} selected={}",
            scanned,
            selected.len()
        );
        if selected.is_empty() {
            return Err(ServiceError::NoSpecialReports);
        }

        Ok(selected)
    }
}
