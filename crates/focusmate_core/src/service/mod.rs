//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate pipeline stages and repository calls into the journal,
//!   suggestions and stats use-cases.
//! - Keep the excluded HTTP/session layer decoupled from storage details.

pub mod insight_service;
pub mod journal_service;
pub mod task_service;
pub mod user_service;
