//! Static text resource

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::headers::Headers;
use crate::http::request::Request;
use crate::http::response::StatusCode;
use crate::resource::{BodyFuture, Resource};

/// Serves a fixed piece of text configured at startup.
pub struct StaticText {
    path: String,
    text: String,
}

impl StaticText {
    pub fn new(path: &str, text: &str) -> Self {
        Self {
            path: path.to_string(),
            text: text.to_string(),
        }
    }
}

impl Resource for StaticText {
    fn check(&self, request: &Request) -> bool {
        request.path.starts_with(&self.path)
    }

    fn head(&self, _request: &Request, _request_headers: &Headers) -> (StatusCode, Headers) {
        let mut headers = Headers::new();
        headers.append("Content-Type", "text/plain");
        headers.append("Content-Length", &self.text.len().to_string());
        (StatusCode::Ok, headers)
    }

    fn body<'a>(
        &'a self,
        conn: &'a mut (dyn AsyncWrite + Unpin + Send),
        _request: &'a Request,
        _request_headers: &'a Headers,
    ) -> BodyFuture<'a> {
        Box::pin(async move { conn.write_all(self.text.as_bytes()).await })
    }
}
