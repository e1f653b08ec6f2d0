use crate::http::headers::Headers;
use crate::http::request::{Method, Request, Version};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// More bytes are needed before a verdict is possible
    Incomplete,
    /// The input can never become a valid request
    Malformed,
}

/// Parses an HTTP request line from the start of `buf`.
///
/// Recognizes exactly the method tokens of [`Method`] (case-sensitive), a
/// single-SP-delimited path token, and one of the 8-byte version tokens
/// `HTTP/0.9`, `HTTP/1.0`, `HTTP/1.1`, terminated by CRLF or a bare LF.
/// Returns the request and the exact number of bytes consumed including
/// the terminator. `Incomplete` until a terminator is seen; any unknown
/// token or extra field is `Malformed`.
pub fn parse_request_line(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let nl = buf
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(ParseError::Incomplete)?;
    let consumed = nl + 1;

    let line = &buf[..nl];
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let line = std::str::from_utf8(line).map_err(|_| ParseError::Malformed)?;

    let mut fields = line.split(' ');

    let method = fields
        .next()
        .and_then(Method::from_token)
        .ok_or(ParseError::Malformed)?;
    let path = fields
        .next()
        .filter(|p| !p.is_empty())
        .ok_or(ParseError::Malformed)?;
    let version = fields
        .next()
        .and_then(Version::from_token)
        .ok_or(ParseError::Malformed)?;
    if fields.next().is_some() {
        return Err(ParseError::Malformed);
    }

    let request = Request {
        method,
        path: path.to_string(),
        version,
        raw_line: line.to_string(),
    };

    Ok((request, consumed))
}

/// Parses a complete header block from `buf`.
///
/// The block is first canonicalized per RFC2616 linear-whitespace rules:
/// runs of SP/HT collapse to a single SP, runs of CR/LF collapse to a
/// single CRLF unless followed by SP/HT (a folded continuation), in which
/// case the whole run collapses to a single SP. `Incomplete` until the
/// double-CRLF terminator is observed. Duplicate keys merge per the
/// [`Headers::append`] comma rule; lines without a colon are dropped.
pub fn parse_header_block(buf: &[u8]) -> Result<Headers, ParseError> {
    // An empty line right at the start terminates an empty header block.
    if buf.starts_with(b"\r\n") || buf.starts_with(b"\n") {
        return Ok(Headers::new());
    }

    let canonical = canonicalize(buf).ok_or(ParseError::Incomplete)?;

    let mut headers = Headers::new();
    let mut rest: &[u8] = &canonical;
    while !rest.is_empty() {
        let (line, tail) = match rest.windows(2).position(|w| w == b"\r\n") {
            Some(at) => (&rest[..at], &rest[at + 2..]),
            None => (rest, &rest[rest.len()..]),
        };
        if let Some(colon) = line.iter().position(|&b| b == b':') {
            let key = String::from_utf8_lossy(&line[..colon]);
            let value = String::from_utf8_lossy(&line[colon + 1..]);
            headers.append(key.trim(), value.trim_start_matches(' '));
        }
        rest = tail;
    }

    Ok(headers)
}

/// Collapses linear whitespace and detects the block terminator.
///
/// Returns the canonical bytes up to (excluding) the terminating CR/LF
/// run, or None if no run containing at least two CRs or two LFs has
/// arrived yet.
fn canonicalize(buf: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(buf.len());
    let mut i = 0;

    while i < buf.len() {
        // Copy non-whitespace as-is
        let start = i;
        while i < buf.len() && !matches!(buf[i], b' ' | b'\t' | b'\r' | b'\n') {
            i += 1;
        }
        out.extend_from_slice(&buf[start..i]);

        // Collapse a run of SP and HT into a single SP
        let start = i;
        while i < buf.len() && matches!(buf[i], b' ' | b'\t') {
            i += 1;
        }
        if i > start {
            out.push(b' ');
        }

        // Collapse a run of CR and LF into a single CRLF, unless the next
        // line begins with SP or HT, in which case the entire whitespace
        // run becomes a single SP
        let eol = i;
        while i < buf.len() && matches!(buf[i], b'\r' | b'\n') {
            i += 1;
        }
        if i > eol {
            let crs = buf[eol..i].iter().filter(|&&b| b == b'\r').count();
            let lfs = buf[eol..i].iter().filter(|&&b| b == b'\n').count();
            if crs >= 2 || lfs >= 2 {
                return Some(out);
            }

            let folded = i;
            while i < buf.len() && matches!(buf[i], b' ' | b'\t') {
                i += 1;
            }
            if i > folded {
                out.push(b' ');
            } else {
                out.extend_from_slice(b"\r\n");
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let line = b"GET /foo HTTP/1.1\r\n";

        let (parsed, consumed) = parse_request_line(line).unwrap();

        assert_eq!(parsed.method, Method::GET);
        assert_eq!(parsed.path, "/foo");
        assert_eq!(parsed.version, Version::V1_1);
        assert_eq!(consumed, 19);
    }

    #[test]
    fn header_block_needs_terminator() {
        let block = b"Host: example.com\r\n";
        assert!(matches!(
            parse_header_block(block),
            Err(ParseError::Incomplete)
        ));
    }
}
