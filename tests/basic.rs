use hutres::utils::UrlUtils;

#[test]
fn test_version() {
    assert!(!hutres::VERSION.is_empty());
}

#[test]
fn test_base_url_defaults_to_https() {
    let url = UrlUtils::validate_base_url("www.hut-reservation.org").expect("URL should parse");
    assert_eq!(url.scheme(), "https");
}
