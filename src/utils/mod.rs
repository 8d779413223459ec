//! Utility functions shared across the services.
//!
//! - [`url_validator`] - URL shape validation and hostname resolvability
//! - [`date`] - Calendar-date parsing and human-readable rendering

pub mod date;
pub mod url_validator;
