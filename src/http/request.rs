/// HTTP request methods.
///
/// The method tokens of RFC2616. Parsing matches the token byte-for-byte,
/// case-sensitive; anything else is rejected as malformed. Only GET and
/// HEAD are served, other methods receive 405 Method Not Allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// TRACE - Echo the received request
    TRACE,
    /// CONNECT - Establish a tunnel
    CONNECT,
}

impl Method {
    /// Parses a method token.
    ///
    /// # Example
    ///
    /// ```
    /// # use bytecast::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_token("get"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "OPTIONS" => Some(Method::OPTIONS),
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "TRACE" => Some(Method::TRACE),
            "CONNECT" => Some(Method::CONNECT),
            _ => None,
        }
    }
}

/// HTTP protocol versions accepted on the request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// HTTP/0.9
    V0_9,
    /// HTTP/1.0
    V1_0,
    /// HTTP/1.1
    V1_1,
}

impl Version {
    /// Parses the fixed 8-byte version token.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "HTTP/0.9" => Some(Version::V0_9),
            "HTTP/1.0" => Some(Version::V1_0),
            "HTTP/1.1" => Some(Version::V1_1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V0_9 => "HTTP/0.9",
            Version::V1_0 => "HTTP/1.0",
            Version::V1_1 => "HTTP/1.1",
        }
    }
}

/// A parsed HTTP request line. Immutable once parsed.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, HEAD, etc.)
    pub method: Method,
    /// The request path (e.g., "/stream")
    pub path: String,
    /// HTTP version from the request line
    pub version: Version,
    /// The raw request line without its terminator, kept for access logging
    pub raw_line: String,
}
