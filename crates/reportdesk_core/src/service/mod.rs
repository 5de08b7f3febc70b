//! Core use-case services.
//!
//! # Responsibility
//! - Validate caller input before any storage access.
//! - Orchestrate repository calls into use-case level APIs.
//! - Turn affected-row counts into not-found semantics.
//!
//! # Invariants
//! - Services are generic over repository traits and never touch SQL.

pub mod error;
pub mod project_service;
pub mod report_service;
