//! Report repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `reports` table.
//! - Own batch insertion with all-or-nothing semantics.
//!
//! # Invariants
//! - `insert_reports` runs in one immediate transaction; any failure leaves
//!   no row of the batch behind.
//! - Inserts require the referenced project to exist.
//! - Lists are returned in insertion order.

use crate::model::report::Report;
use crate::model::EntityKind;
use crate::repo::{ensure_tables_ready, map_insert_error, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const REPORT_SELECT_SQL: &str = "SELECT id, projectid, text FROM reports";

/// Repository interface for report CRUD operations.
pub trait ReportRepository {
    fn insert_report(&self, report: &Report) -> RepoResult<()>;
    /// Inserts every report of the batch for `project_id`, or none of them.
    fn insert_reports(&mut self, project_id: &str, reports: &[Report]) -> RepoResult<()>;
    fn list_reports(&self) -> RepoResult<Vec<Report>>;
    fn list_reports_for_project(&self, project_id: &str) -> RepoResult<Vec<Report>>;
    fn get_report(&self, id: &str) -> RepoResult<Option<Report>>;
    /// Replaces report text; returns the affected row count.
    fn update_report_text(&self, id: &str, text: &str) -> RepoResult<usize>;
    /// Returns the affected row count.
    fn delete_report(&self, id: &str) -> RepoResult<usize>;
}

/// SQLite-backed report repository.
pub struct SqliteReportRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteReportRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_tables_ready(conn, &["projects", "reports"])?;
        Ok(Self { conn })
    }
}

impl ReportRepository for SqliteReportRepository<'_> {
    fn insert_report(&self, report: &Report) -> RepoResult<()> {
        insert_report_row(&*self.conn, report)
    }

    fn insert_reports(&mut self, project_id: &str, reports: &[Report]) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        if !project_exists_in_tx(&tx, project_id)? {
            return Err(RepoError::MissingProject(project_id.to_string()));
        }

        for report in reports {
            if report.project_id != project_id {
                return Err(RepoError::InvalidData(format!(
                    "report `{}` belongs to `{}`, not batch project `{project_id}`",
                    report.id, report.project_id
                )));
            }
            insert_report_row(&tx, report)?;
        }

        tx.commit()?;
        Ok(())
    }

    fn list_reports(&self) -> RepoResult<Vec<Report>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REPORT_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        collect_reports(&mut rows)
    }

    fn list_reports_for_project(&self, project_id: &str) -> RepoResult<Vec<Report>> {
        let mut stmt = self.conn.prepare(&format!(
            "{REPORT_SELECT_SQL} WHERE projectid = ?1 ORDER BY rowid ASC;"
        ))?;
        let mut rows = stmt.query([project_id])?;
        collect_reports(&mut rows)
    }

    fn get_report(&self, id: &str) -> RepoResult<Option<Report>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REPORT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let report = parse_report_row(row)?;

        if rows.next()?.is_some() {
            return Err(RepoError::InvalidData(format!(
                "multiple rows share id `{id}` in reports.id"
            )));
        }

        Ok(Some(report))
    }

    fn update_report_text(&self, id: &str, text: &str) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE reports SET text = ?1 WHERE id = ?2;",
            params![text, id],
        )?;
        Ok(changed)
    }

    fn delete_report(&self, id: &str) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM reports WHERE id = ?1;", [id])?;
        Ok(changed)
    }
}

fn insert_report_row(conn: &Connection, report: &Report) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO reports (id, projectid, text) VALUES (?1, ?2, ?3);",
        params![
            report.id.as_str(),
            report.project_id.as_str(),
            report.text.as_str(),
        ],
    )
    .map_err(|err| {
        map_insert_error(
            err,
            EntityKind::Report,
            &report.id,
            Some(report.project_id.as_str()),
        )
    })?;
    Ok(())
}

fn project_exists_in_tx(tx: &Transaction<'_>, project_id: &str) -> RepoResult<bool> {
    let exists: i64 = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1);",
        [project_id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn collect_reports(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<Report>> {
    let mut reports = Vec::new();
    while let Some(row) = rows.next()? {
        reports.push(parse_report_row(row)?);
    }
    Ok(reports)
}

fn parse_report_row(row: &Row<'_>) -> RepoResult<Report> {
    let id: String = row.get("id")?;
    let text = row.get::<_, Option<String>>("text")?.ok_or_else(|| {
        RepoError::InvalidData(format!("null text for report `{id}` in reports.text"))
    })?;

    Ok(Report {
        id,
        project_id: row.get("projectid")?,
        text,
    })
}
