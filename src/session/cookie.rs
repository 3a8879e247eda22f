//! Cookie header parsing

/// Cookie the service sets on the CSRF endpoint
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Header the login request echoes the token back in
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Find the value of `name` in a `Cookie` header value (`a=1; b=2`)
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
