//! Utility functions for code derivation and URL processing.
//!
//! - [`code_generator`] - Hash-derived short codes and alias validation
//! - [`url_normalizer`] - Scheme normalization
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod url_normalizer;
