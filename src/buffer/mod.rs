//! Byte buffering
//!
//! This module contains the multi-reader ring buffer that fans one
//! producer's byte stream out to independent consumption cursors.

pub mod ring;

pub use ring::{ReaderId, RingBuffer, RingError};
