use bytecast::http::headers::Headers;
use bytecast::http::response::{StatusCode, error_body, write_head};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
}

#[test]
fn test_write_head_without_headers() {
    let mut buf = Vec::new();
    write_head(&mut buf, StatusCode::Ok, &Headers::new());

    assert_eq!(buf, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[test]
fn test_write_head_with_headers_in_order() {
    let mut headers = Headers::new();
    headers.append("Server", "bytecast");
    headers.append("Content-Type", "text/html");

    let mut buf = Vec::new();
    write_head(&mut buf, StatusCode::NotFound, &headers);

    assert_eq!(
        buf,
        b"HTTP/1.1 404 Not Found\r\nServer: bytecast\r\nContent-Type: text/html\r\n\r\n"
            .as_slice()
    );
}

#[test]
fn test_error_body_names_the_status_twice() {
    let body = error_body(StatusCode::NotFound);

    assert_eq!(
        body,
        "<html><head><title>404 Not Found</title></head>\
         <body><h1>404 Not Found</h1></body></html>\r\n"
    );
}
