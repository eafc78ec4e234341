//! Upstream subsystem.
//!
//! # Data Flow
//! ```text
//! UpstreamConfig.url
//!     → target.rs (scheme + authority, parsed once)
//!     → client.rs (one pooled HTTP/1.1 client, built once)
//!     → both injected into the forwarding handler state
//! ```
//!
//! # Design Decisions
//! - One fixed upstream for the process lifetime, no load balancing
//! - The client is constructed explicitly at startup; its connection pool
//!   is shared by every request task and handles its own synchronization
//! - No timeouts unless configured

pub mod client;
pub mod target;

pub use client::{build_client, UpstreamClient};
pub use target::UpstreamTarget;
