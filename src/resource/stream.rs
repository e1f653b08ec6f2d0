//! Ring-buffer-backed streaming resource

use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::headers::Headers;
use crate::http::request::Request;
use crate::http::response::StatusCode;
use crate::resource::{BodyFuture, Resource};
use crate::stream::{POLL_INTERVAL, Stream};

pub const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

const SEND_CHUNK: usize = 8192;

/// Serves a live stream's bytes from its ring buffer.
///
/// Each GET opens its own read cursor at the live point and drains it to
/// the client until the stream shuts down or the client disconnects. One
/// slow or broken client never affects another reader of the same stream.
pub struct StreamResource {
    path: String,
    content_type: String,
    stream: Arc<Stream>,
}

impl StreamResource {
    pub fn new(path: &str, content_type: &str, stream: Arc<Stream>) -> Self {
        Self {
            path: path.to_string(),
            content_type: content_type.to_string(),
            stream,
        }
    }
}

impl Resource for StreamResource {
    fn check(&self, request: &Request) -> bool {
        request.path.starts_with(&self.path)
    }

    fn head(&self, _request: &Request, _request_headers: &Headers) -> (StatusCode, Headers) {
        let mut headers = Headers::new();
        headers.append("Content-Type", &self.content_type);
        (StatusCode::Ok, headers)
    }

    fn body<'a>(
        &'a self,
        conn: &'a mut (dyn AsyncWrite + Unpin + Send),
        _request: &'a Request,
        _request_headers: &'a Headers,
    ) -> BodyFuture<'a> {
        Box::pin(async move {
            let reader = match self.stream.open_reader() {
                Ok(reader) => reader,
                Err(e) => {
                    // Reader slots exhausted; close this connection
                    // cleanly without touching the others.
                    tracing::warn!(path = %self.path, error = %e, "Cannot attach stream reader");
                    return Ok(());
                }
            };

            let mut chunk = vec![0u8; SEND_CHUNK];
            while self.stream.is_active() {
                let n = self.stream.peek(reader, &mut chunk);
                if n == 0 {
                    tokio::time::sleep(POLL_INTERVAL).await;
                    continue;
                }
                match conn.write(&chunk[..n]).await {
                    Ok(0) => break,
                    Ok(written) => {
                        self.stream.consume(reader, written);
                        if conn.flush().await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(path = %self.path, error = %e, "Client write failed");
                        break;
                    }
                }
            }

            self.stream.close_reader(reader);
            Ok(())
        })
    }

    fn close(&self) {
        self.stream.close();
    }
}
