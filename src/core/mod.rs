//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Document model (DocumentEntry, ScanError)
//! - Target extension filter
//! - First-line reading
//! - Rendering functions for table and simple output

pub mod file_reader;
pub mod filter;
pub mod model;
pub mod render;
