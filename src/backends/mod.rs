//! Backend module - filesystem traversal

pub mod scan;
