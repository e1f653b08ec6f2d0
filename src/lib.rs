//! Bytecast - Live Byte-Stream Fan-Out over HTTP
//!
//! Bytecast ingests one continuous byte stream from an external producer
//! (an encoder process, a capture device, a transcode pipe) and serves it
//! to any number of concurrently connected HTTP clients, each joining at
//! the current live point.
//!
//! The core pieces are a multi-reader single-writer ring buffer that fans
//! one input stream out to independent read cursors, and a small HTTP/1.x
//! engine with an ordered resource-dispatch table that drives streaming
//! response bodies through that buffer.

pub mod buffer;
pub mod config;
pub mod http;
pub mod resource;
pub mod server;
pub mod stream;
