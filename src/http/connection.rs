use std::sync::Arc;
use std::time::SystemTime;

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::headers::Headers;
use crate::http::parser::{ParseError, parse_header_block, parse_request_line};
use crate::http::request::{Method, Request};
use crate::http::response::{StatusCode, error_body, write_head};
use crate::resource::{Registry, Resource};

/// Upper bound on the request line plus header block. A request head that
/// has not completed by the time this many bytes have accumulated closes
/// the connection.
const MAX_REQUEST_BYTES: usize = 8192;

const SERVER_NAME: &str = concat!("bytecast/", env!("CARGO_PKG_VERSION"));

/// Handler for one accepted connection.
///
/// Reads and parses a single request, dispatches it through the resource
/// registry, writes the response and closes. Generic over the socket type
/// so tests can drive it over an in-memory duplex stream.
pub struct Connection<S> {
    socket: S,
    buffer: BytesMut,
    registry: Arc<Registry>,
}

enum Handler<'a> {
    Resource(&'a dyn Resource),
    FixedBody(String),
    HeadersOnly,
}

impl<S: AsyncRead + AsyncWrite + Unpin + Send> Connection<S> {
    pub fn new(socket: S, registry: Arc<Registry>) -> Self {
        Self {
            socket,
            buffer: BytesMut::with_capacity(MAX_REQUEST_BYTES),
            registry,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.read_request().await? {
            Some((request, request_headers)) => self.respond(&request, &request_headers).await,
            None => Ok(()),
        }
    }

    /// Reads the request line, then the header block, growing the buffer
    /// until each parses. Returns None for the cases that end the
    /// connection without a response: peer close before a complete head,
    /// a malformed request line, or a head exceeding the buffer bound.
    async fn read_request(&mut self) -> anyhow::Result<Option<(Request, Headers)>> {
        let request = loop {
            match parse_request_line(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    break request;
                }
                Err(ParseError::Malformed) => {
                    tracing::debug!("Malformed request line, closing");
                    return Ok(None);
                }
                Err(ParseError::Incomplete) => {
                    if !self.fill_buffer().await? {
                        return Ok(None);
                    }
                }
            }
        };

        let request_headers = loop {
            match parse_header_block(&self.buffer) {
                Ok(headers) => break headers,
                Err(_) => {
                    if !self.fill_buffer().await? {
                        return Ok(None);
                    }
                }
            }
        };

        Ok(Some((request, request_headers)))
    }

    /// Reads more bytes into the accumulation buffer. Returns false when
    /// the peer closed or the buffer bound was hit.
    async fn fill_buffer(&mut self) -> anyhow::Result<bool> {
        if self.buffer.len() >= MAX_REQUEST_BYTES {
            tracing::debug!(
                limit = MAX_REQUEST_BYTES,
                "Request head exceeds buffer bound, closing"
            );
            return Ok(false);
        }
        let n = self.socket.read_buf(&mut self.buffer).await?;
        Ok(n > 0)
    }

    async fn respond(&mut self, request: &Request, request_headers: &Headers) -> anyhow::Result<()> {
        let mut response_headers = base_response_headers();

        let (status, handler) = match request.method {
            Method::GET | Method::HEAD => match self.registry.find(request) {
                Some(resource) => {
                    let (status, extra) = resource.head(request, request_headers);
                    for (key, value) in extra.iter() {
                        response_headers.append(key, value);
                    }
                    (status, Handler::Resource(resource))
                }
                None => {
                    let body = error_body(StatusCode::NotFound);
                    response_headers.append("Content-Type", "text/html");
                    response_headers.append("Content-Length", &body.len().to_string());
                    (StatusCode::NotFound, Handler::FixedBody(body))
                }
            },
            _ => {
                response_headers.append("Allow", "GET");
                response_headers.append("Allow", "HEAD");
                (StatusCode::MethodNotAllowed, Handler::HeadersOnly)
            }
        };

        let mut head = Vec::new();
        write_head(&mut head, status, &response_headers);
        self.socket.write_all(&head).await?;

        // Logged before the body transfer, which may run unbounded, so
        // header-phase failures are distinguishable from body-phase ones.
        log_access(request, request_headers, &response_headers);

        if request.method == Method::GET {
            match handler {
                Handler::Resource(resource) => {
                    resource
                        .body(&mut self.socket, request, request_headers)
                        .await?;
                }
                Handler::FixedBody(body) => {
                    self.socket.write_all(body.as_bytes()).await?;
                }
                Handler::HeadersOnly => {}
            }
        }

        self.socket.flush().await?;
        Ok(())
    }
}

/// The headers every response starts from.
fn base_response_headers() -> Headers {
    let mut headers = Headers::new();
    headers.append("Date", &httpdate::fmt_http_date(SystemTime::now()));
    headers.append("Server", SERVER_NAME);
    headers
}

/// Apache-style access entry: raw request line, response length if known,
/// client User-Agent. The timestamp comes from the subscriber.
fn log_access(request: &Request, request_headers: &Headers, response_headers: &Headers) {
    let content_length = response_headers.get("Content-Length").unwrap_or("-");
    let user_agent = request_headers.get("User-Agent").unwrap_or("-");
    tracing::info!(
        target: "access",
        content_length,
        user_agent,
        "\"{}\"",
        request.raw_line
    );
}
