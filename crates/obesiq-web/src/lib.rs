//! obesiq-web — web dashboard for the obesity-risk assessor.
//! Provides:
//!   - Assessment form and result view
//!   - JSON assessment API
//!   - General health-advice pages
//!   - System status (config, classifier availability)

pub mod handlers;
pub mod router;
pub mod state;
