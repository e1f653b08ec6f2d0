//! Content resources and dispatch
//!
//! A [`Resource`] is a path-matched content provider with three
//! capabilities: `check` decides whether it handles a request, `head`
//! produces the status and response headers, `body` streams the payload.
//! Resources are registered in order at server start and tried in order
//! per request; the first match wins and exactly one resource handles a
//! given request. Requests nothing matches fall through to the built-in
//! 404 in the connection handler.

pub mod status;
pub mod stream;
pub mod text;

use std::future::Future;
use std::io;
use std::pin::Pin;

use tokio::io::AsyncWrite;

use crate::http::headers::Headers;
use crate::http::request::Request;
use crate::http::response::StatusCode;

pub use status::StatusPage;
pub use stream::StreamResource;
pub use text::StaticText;

/// Future returned by [`Resource::body`].
pub type BodyFuture<'a> = Pin<Box<dyn Future<Output = io::Result<()>> + Send + 'a>>;

/// A path-matched HTTP content provider.
pub trait Resource: Send + Sync {
    /// Whether this resource handles the request.
    fn check(&self, request: &Request) -> bool;

    /// Status and content-specific response headers for the request. The
    /// connection handler merges these onto the base Date/Server set.
    fn head(&self, request: &Request, request_headers: &Headers) -> (StatusCode, Headers);

    /// Writes the response body to `conn`. Streaming implementations run
    /// until their stream shuts down or the client write fails; either way
    /// the failure stays local to this one connection.
    fn body<'a>(
        &'a self,
        conn: &'a mut (dyn AsyncWrite + Unpin + Send),
        request: &'a Request,
        request_headers: &'a Headers,
    ) -> BodyFuture<'a>;

    /// Releases anything the resource owns at server shutdown.
    fn close(&self) {}
}

/// Ordered collection of resources, scanned first-match-wins.
#[derive(Default)]
pub struct Registry {
    resources: Vec<Box<dyn Resource>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            resources: Vec::new(),
        }
    }

    /// Appends a resource. Registration order is dispatch order.
    pub fn register(&mut self, resource: Box<dyn Resource>) {
        self.resources.push(resource);
    }

    /// Finds the first resource whose `check` accepts the request.
    pub fn find(&self, request: &Request) -> Option<&dyn Resource> {
        self.resources
            .iter()
            .find(|r| r.check(request))
            .map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn close_all(&self) {
        for resource in &self.resources {
            resource.close();
        }
    }
}
