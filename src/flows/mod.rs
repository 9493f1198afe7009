//! Flows module - end-to-end operations built on core and backends

pub mod combine;
