//! Producer drain loop
//!
//! One task per stream pulls bytes from the input source into the ring.
//! The loop waits for readability with a bounded timeout so a cleared
//! active flag is observed within [`READ_TIMEOUT`] even when the producer
//! goes quiet. Read errors and EOF never terminate the stream on their
//! own; only `Stream::close` does.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::time::timeout;

use super::{POLL_INTERVAL, Stream};

/// Bound on each readiness wait. Also the worst-case shutdown latency of
/// the source task.
pub const READ_TIMEOUT: Duration = Duration::from_secs(5);

const FILL_CHUNK: usize = 8192;

pub(super) async fn drain<R>(stream: Arc<Stream>, mut input: R)
where
    R: AsyncRead + Unpin + Send,
{
    let mut scratch = vec![0u8; FILL_CHUNK];
    let mut at_eof = false;

    while stream.is_active() {
        // Readers only ever free space, so a nonzero check here cannot be
        // invalidated before the write below.
        let free = stream.free_space();
        if free == 0 {
            tokio::time::sleep(POLL_INTERVAL).await;
            continue;
        }

        let want = free.min(scratch.len());
        match timeout(READ_TIMEOUT, input.read(&mut scratch[..want])).await {
            Err(_) => continue,
            Ok(Ok(0)) => {
                if !at_eof {
                    tracing::debug!("Stream input at EOF, waiting for more data");
                    at_eof = true;
                }
                tokio::time::sleep(POLL_INTERVAL).await;
            }
            Ok(Ok(n)) => {
                at_eof = false;
                stream.write(&scratch[..n]);
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Stream input read failed");
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        }
    }

    tracing::debug!("Stream source task stopped");
}
