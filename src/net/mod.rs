//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (parse address, bind)
//!     → tokio TcpListener handed to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - No connection limit: every accepted connection gets its own task
//! - Bind failures are fatal to the process

pub mod listener;

pub use listener::{bind, ListenerError};
