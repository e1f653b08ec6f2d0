use bytecast::http::request::{Method, Version};

#[test]
fn test_method_from_token() {
    assert_eq!(Method::from_token("GET"), Some(Method::GET));
    assert_eq!(Method::from_token("HEAD"), Some(Method::HEAD));
    assert_eq!(Method::from_token("OPTIONS"), Some(Method::OPTIONS));
    assert_eq!(Method::from_token("POST"), Some(Method::POST));
    assert_eq!(Method::from_token("PUT"), Some(Method::PUT));
    assert_eq!(Method::from_token("DELETE"), Some(Method::DELETE));
    assert_eq!(Method::from_token("TRACE"), Some(Method::TRACE));
    assert_eq!(Method::from_token("CONNECT"), Some(Method::CONNECT));
}

#[test]
fn test_method_token_is_case_sensitive() {
    assert_eq!(Method::from_token("get"), None);
    assert_eq!(Method::from_token("Get"), None);
}

#[test]
fn test_unknown_method_token() {
    assert_eq!(Method::from_token("PATCH"), None);
    assert_eq!(Method::from_token(""), None);
}

#[test]
fn test_version_from_token() {
    assert_eq!(Version::from_token("HTTP/0.9"), Some(Version::V0_9));
    assert_eq!(Version::from_token("HTTP/1.0"), Some(Version::V1_0));
    assert_eq!(Version::from_token("HTTP/1.1"), Some(Version::V1_1));
    assert_eq!(Version::from_token("HTTP/2.0"), None);
    assert_eq!(Version::from_token("http/1.1"), None);
}

#[test]
fn test_version_as_str_round_trip() {
    for version in [Version::V0_9, Version::V1_0, Version::V1_1] {
        assert_eq!(Version::from_token(version.as_str()), Some(version));
    }
}
