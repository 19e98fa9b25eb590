//! Backends module - File system operations
//!
//! Provides:
//! - scan: Directory listing and document collection

pub mod scan;
