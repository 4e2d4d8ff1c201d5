use shelf::http::parser::{ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /index.html HTTP/1.0\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/index.html");
    assert_eq!(parsed.version, "HTTP/1.0");
}

#[test]
fn test_parse_head_request() {
    let req = b"HEAD /about.html HTTP/1.0\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "HEAD");
    assert_eq!(parsed.path, "/about.html");
}

#[test]
fn test_parse_only_first_line_is_consulted() {
    // Headers and body after the first line must not affect parsing.
    let req = b"GET / HTTP/1.0\r\nHost: example.com\r\nAccept: */*\r\n\r\nextra body";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.0");
}

#[test]
fn test_parse_line_without_crlf() {
    // A bare request line with no terminator at all is still parseable.
    let req = b"GET /plain HTTP/1.0";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.path, "/plain");
}

#[test]
fn test_parse_lf_only_terminator() {
    let req = b"GET /x HTTP/1.0\nHost: example.com\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.path, "/x");
}

#[test]
fn test_parse_multiple_spaces_between_tokens() {
    let req = b"GET   /index.html    HTTP/1.0\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/index.html");
}

#[test]
fn test_parse_unknown_method_token_is_not_a_parse_error() {
    // Unsupported methods are answered 501 by the handler, not rejected here.
    let req = b"POST /submit HTTP/1.0\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "POST");
}

#[test]
fn test_parse_empty_input() {
    let result = parse_request_line(b"");
    assert!(matches!(result, Err(ParseError::Malformed)));
}

#[test]
fn test_parse_one_token() {
    let result = parse_request_line(b"GET\r\n");
    assert!(matches!(result, Err(ParseError::Malformed)));
}

#[test]
fn test_parse_two_tokens() {
    let result = parse_request_line(b"GET /x\r\n");
    assert!(matches!(result, Err(ParseError::Malformed)));
}

#[test]
fn test_parse_four_tokens() {
    let result = parse_request_line(b"GET /x HTTP/1.0 extra\r\n");
    assert!(matches!(result, Err(ParseError::Malformed)));
}

#[test]
fn test_parse_whitespace_only_line() {
    let result = parse_request_line(b"   \r\n");
    assert!(matches!(result, Err(ParseError::Malformed)));
}

#[test]
fn test_parse_non_utf8_input() {
    let result = parse_request_line(&[0xff, 0xfe, 0x20, 0xff]);
    assert!(matches!(result, Err(ParseError::Malformed)));
}

#[test]
fn test_parse_binary_bytes_after_first_line_ignored() {
    // Non-UTF-8 header or body bytes after the request line must not make
    // the request unparseable.
    let mut req = b"GET /index.html HTTP/1.0\r\n\r\n".to_vec();
    req.extend_from_slice(&[0xff, 0xfe, 0x80]);

    let parsed = parse_request_line(&req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/index.html");
}

#[test]
fn test_parse_non_utf8_header_value_ignored() {
    // A Latin-1 header value on the second line is never examined.
    let mut req = b"GET / HTTP/1.0\r\nX-Name: ".to_vec();
    req.extend_from_slice(&[0xe9, 0xe8]);
    req.extend_from_slice(b"\r\n\r\n");

    let parsed = parse_request_line(&req).unwrap();

    assert_eq!(parsed.path, "/");
}

#[test]
fn test_parse_oversize_method_rejected() {
    let req = format!("{} / HTTP/1.0\r\n", "M".repeat(9));
    let result = parse_request_line(req.as_bytes());

    assert!(matches!(result, Err(ParseError::TokenTooLong)));
}

#[test]
fn test_parse_oversize_path_rejected() {
    let path = format!("/{}", "a".repeat(99)); // 100 bytes total
    let req = format!("GET {} HTTP/1.0\r\n", path);
    let result = parse_request_line(req.as_bytes());

    assert!(matches!(result, Err(ParseError::TokenTooLong)));
}

#[test]
fn test_parse_path_at_length_bound_accepted() {
    let path = format!("/{}", "a".repeat(98)); // exactly 99 bytes
    let req = format!("GET {} HTTP/1.0\r\n", path);
    let parsed = parse_request_line(req.as_bytes()).unwrap();

    assert_eq!(parsed.path, path);
}

#[test]
fn test_parse_oversize_version_rejected() {
    let req = format!("GET / {}\r\n", "V".repeat(100));
    let result = parse_request_line(req.as_bytes());

    assert!(matches!(result, Err(ParseError::TokenTooLong)));
}
