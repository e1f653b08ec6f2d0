use crate::http::headers::Headers;

/// HTTP status codes bytecast can answer with.
///
/// - `Ok` (200): request matched a resource
/// - `NotFound` (404): no registered resource matched the path
/// - `MethodNotAllowed` (405): method other than GET or HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use bytecast::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// Serializes a response head: status line, headers, blank line.
///
/// Responses are always written as HTTP/1.1 regardless of the request
/// version. Streaming bodies carry no Content-Length and run until the
/// stream shuts down or the client disconnects.
pub fn write_head(buf: &mut Vec<u8>, status: StatusCode, headers: &Headers) {
    let status_line = format!(
        "HTTP/1.1 {} {}\r\n",
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());
    headers.write_into(buf);
    buf.extend_from_slice(b"\r\n");
}

/// Builds the fixed HTML error body for a non-200 status.
pub fn error_body(status: StatusCode) -> String {
    let title = format!("{} {}", status.as_u16(), status.reason_phrase());
    format!(
        "<html><head><title>{}</title></head><body><h1>{}</h1></body></html>\r\n",
        title, title
    )
}
