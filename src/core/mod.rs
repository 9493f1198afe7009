//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run configuration and summary model
//! - Fatal error types
//! - Path resolution and normalization
//! - Strict UTF-8 file reading
//! - Block rendering
//! - Console progress reporting

pub mod console;
pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
