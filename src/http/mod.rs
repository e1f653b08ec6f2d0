//! HTTP protocol implementation.
//!
//! This module implements the minimal HTTP/1.x surface bytecast needs:
//! request-line and header-block parsing over raw byte buffers, response
//! head serialization, and the per-connection handler.
//!
//! # Connection lifecycle
//!
//! Each accepted connection is handled by one task:
//!
//! ```text
//!        ┌───────────────┐
//!        │ Request line  │ ← read until CRLF/LF, exact-token parse
//!        └───────┬───────┘
//!                │ parsed (Incomplete → read more, Malformed → close)
//!                ▼
//!        ┌───────────────┐
//!        │ Header block  │ ← read until the double-CRLF terminator
//!        └───────┬───────┘
//!                │ complete
//!                ▼
//!        ┌───────────────┐
//!        │   Dispatch    │ ← first matching resource, or built-in 404/405
//!        └───────┬───────┘
//!                │ head written, access entry logged
//!                ▼
//!        ┌───────────────┐
//!        │     Body      │ ← streamed until stream shutdown or disconnect
//!        └───────┬───────┘
//!                └─ Close (one request per connection)
//! ```

pub mod connection;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
