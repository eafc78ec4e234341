//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, HTTP/1.x)
//!     → request.rs (request ID for log correlation)
//!     → forward.rs (rewrite, one upstream round trip)
//!     → response.rs (relay upstream response or fixed 500)
//!     → Send to client
//! ```

pub mod forward;
pub mod request;
pub mod response;
pub mod server;

pub use forward::{forward, ForwardState};
pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use response::SERVER_ERROR_BODY;
pub use server::HttpServer;
