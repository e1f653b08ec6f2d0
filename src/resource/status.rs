//! Server status page

use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::headers::Headers;
use crate::http::request::Request;
use crate::http::response::StatusCode;
use crate::resource::{BodyFuture, Resource};
use crate::stream::Stream;

const SERVER_NAME: &str = concat!("bytecast/", env!("CARGO_PKG_VERSION"));

/// Serves an HTML status summary at `/status`.
pub struct StatusPage {
    streams: Vec<Arc<Stream>>,
}

impl StatusPage {
    pub fn new(streams: Vec<Arc<Stream>>) -> Self {
        Self { streams }
    }

    fn render(&self) -> String {
        let active = self.streams.iter().filter(|s| s.is_active()).count();
        format!(
            "<html>\n<head>\n<title>{name} - Status</title>\n</head>\n<body>\n\
             <h1>{name} Status</h1>\n<p>Active streams: {active}</p>\n</body>\n</html>\n",
            name = SERVER_NAME,
            active = active,
        )
    }
}

impl Resource for StatusPage {
    fn check(&self, request: &Request) -> bool {
        request.path.starts_with("/status")
    }

    fn head(&self, _request: &Request, _request_headers: &Headers) -> (StatusCode, Headers) {
        let mut headers = Headers::new();
        headers.append("Content-Type", "text/html");
        (StatusCode::Ok, headers)
    }

    fn body<'a>(
        &'a self,
        conn: &'a mut (dyn AsyncWrite + Unpin + Send),
        _request: &'a Request,
        _request_headers: &'a Headers,
    ) -> BodyFuture<'a> {
        Box::pin(async move { conn.write_all(self.render().as_bytes()).await })
    }
}
