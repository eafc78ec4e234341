//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through `tracing`; request spans from `tower_http`
//! - `RUST_LOG` wins over the configured level
//! - No metrics

pub mod logging;
