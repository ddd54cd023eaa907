//! Outbound adapters for infrastructure the domain depends on.

pub mod persistence;
