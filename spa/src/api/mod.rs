use gloo_net::http::RequestBuilder;
use gloo_storage::{LocalStorage, Storage};

pub mod config_api;
pub mod housing_api;

/// Local storage key the login flow stores the credential token under.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Attaches the stored credential token as a bearer `Authorization` header.
/// Requests pass through untouched when no token is stored; the builder is
/// consumed and returned, so the caller's request is never mutated in place.
pub fn with_auth(request: RequestBuilder) -> RequestBuilder {
    match bearer(stored_token()) {
        Some(value) => request.header("Authorization", &value),
        None => request,
    }
}

// The token is written by the login flow as a plain string, so it is read
// through the raw storage handle rather than the JSON-typed accessor.
fn stored_token() -> Option<String> {
    LocalStorage::raw().get_item(AUTH_TOKEN_KEY).ok().flatten()
}

/// `Authorization` header value for a stored token, if one is usable.
fn bearer(token: Option<String>) -> Option<String> {
    match token {
        Some(token) if !token.is_empty() => Some(format!("Bearer {token}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::bearer;

    #[test]
    fn stored_token_becomes_a_bearer_header() {
        assert_eq!(bearer(Some("abc".to_owned())), Some("Bearer abc".to_owned()));
    }

    #[test]
    fn absent_token_adds_nothing() {
        assert_eq!(bearer(None), None);
    }

    #[test]
    fn empty_token_adds_nothing() {
        assert_eq!(bearer(Some(String::new())), None);
    }
}
