//! Ordered header set with RFC2616 duplicate handling.

/// An ordered mapping from case-insensitive keys to string values.
///
/// Keys are unique within the set. [`append`](Headers::append) merges a
/// duplicate key by concatenating the new value onto the old one with a
/// comma, per RFC2616 section 4.2; [`replace`](Headers::replace)
/// overwrites. Used for both request and response headers.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a value by key, ignoring ASCII case.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Adds a header. If the key already exists, the new value is
    /// concatenated onto the existing one, separated by a comma.
    pub fn append(&mut self, key: &str, value: &str) {
        for (k, v) in self.entries.iter_mut() {
            if k.eq_ignore_ascii_case(key) {
                v.push(',');
                v.push_str(value);
                return;
            }
        }
        self.entries.push((key.to_string(), value.to_string()));
    }

    /// Adds a header. If the key already exists, the old value is replaced.
    pub fn replace(&mut self, key: &str, value: &str) {
        for (k, v) in self.entries.iter_mut() {
            if k.eq_ignore_ascii_case(key) {
                *v = value.to_string();
                return;
            }
        }
        self.entries.push((key.to_string(), value.to_string()));
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes the set in wire format, one `Key: value\r\n` line per
    /// entry, in insertion order.
    pub fn write_into(&self, buf: &mut Vec<u8>) {
        for (k, v) in &self.entries {
            buf.extend_from_slice(k.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(v.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }
    }
}
