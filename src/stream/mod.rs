//! Live streams
//!
//! A [`Stream`] pairs one ring buffer with one background task that drains
//! an input source into it. Connection tasks attach read cursors to the
//! buffer and follow the live point; closing the stream clears its active
//! flag, which every loop (the source fill and each body drain) polls at
//! its iteration boundary.

pub mod source;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::io::AsyncRead;

use crate::buffer::{ReaderId, RingBuffer, RingError};

/// Default ring capacity, 2 MiB.
pub const DEFAULT_RING_CAPACITY: usize = 4096 * 16 * 32;

/// Sleep interval for body loops waiting on ring data.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// One live stream: a ring buffer fed by a single writer task.
///
/// Shared as `Arc<Stream>` between the server, the source task and the
/// resources streaming from it. The ring lives under a mutex that is only
/// held for cursor arithmetic and memory copies, never across an await.
pub struct Stream {
    ring: Mutex<RingBuffer>,
    active: AtomicBool,
}

impl Stream {
    /// Creates the stream and spawns its source task, which drains `input`
    /// into the ring until [`close`](Self::close) is called.
    pub fn spawn<R>(input: R, capacity: usize) -> Arc<Stream>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let stream = Arc::new(Stream {
            ring: Mutex::new(RingBuffer::new(capacity)),
            active: AtomicBool::new(true),
        });
        tokio::spawn(source::drain(Arc::clone(&stream), input));
        stream
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Signals shutdown. The source task and all body loops observe the
    /// flag at their next iteration; there is nothing to join.
    pub fn close(&self) {
        self.active.store(false, Ordering::Release);
    }

    /// Attaches a new read cursor at the current live point.
    pub fn open_reader(&self) -> Result<ReaderId, RingError> {
        self.ring().open()
    }

    pub fn close_reader(&self, id: ReaderId) {
        self.ring().close(id);
    }

    pub fn available(&self, id: ReaderId) -> usize {
        self.ring().available(id)
    }

    pub fn free_space(&self) -> usize {
        self.ring().free_space()
    }

    /// Copies unread bytes out without advancing the cursor; see
    /// [`RingBuffer::peek`].
    pub fn peek(&self, id: ReaderId, out: &mut [u8]) -> usize {
        self.ring().peek(id, out)
    }

    /// Advances a cursor by the number of bytes actually delivered.
    pub fn consume(&self, id: ReaderId, n: usize) {
        self.ring().consume(id, n);
    }

    /// Discards a reader's backlog, restarting it at the live point.
    pub fn flush_reader(&self, id: ReaderId) {
        self.ring().flush(id);
    }

    pub(crate) fn write(&self, buf: &[u8]) -> usize {
        self.ring().write(buf)
    }

    fn ring(&self) -> MutexGuard<'_, RingBuffer> {
        // Cursor state stays coherent even if a lock holder panicked.
        self.ring.lock().unwrap_or_else(|e| e.into_inner())
    }
}
