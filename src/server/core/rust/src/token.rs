/* src/server/core/rust/src/token.rs */

use std::collections::HashSet;

use crate::locale::cookie_value;

/// Cookie the admin dashboard stores its bearer token in.
pub const TOKEN_COOKIE: &str = "token";

/// External authentication collaborator: answers whether a bearer token is valid.
pub trait TokenVerifier: Send + Sync {
  fn verify(&self, token: &str) -> bool;
}

/// Accepts every token; the backend stays the only authority.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl TokenVerifier for AcceptAll {
  fn verify(&self, _token: &str) -> bool {
    true
  }
}

/// Fixed allow-list, typically read from configuration.
#[derive(Debug, Default, Clone)]
pub struct StaticTokens(HashSet<String>);

impl StaticTokens {
  pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
    Self(tokens.into_iter().filter(|t| !t.is_empty()).collect())
  }
}

impl TokenVerifier for StaticTokens {
  fn verify(&self, token: &str) -> bool {
    self.0.contains(token)
  }
}

/// Extract the token from `Authorization: Bearer <token>`.
pub fn bearer_token(authorization: &str) -> Option<&str> {
  let (scheme, token) = authorization.trim().split_once(' ')?;
  let token = token.trim();
  (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Extract the token from a raw `Cookie` header.
pub fn token_from_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
  cookie_value(cookie_header, name)
}

/// Authorization header first, then the token cookie.
pub fn request_token<'a>(
  authorization: Option<&'a str>,
  cookie_header: Option<&'a str>,
) -> Option<&'a str> {
  authorization
    .and_then(bearer_token)
    .or_else(|| cookie_header.and_then(|h| token_from_cookie(h, TOKEN_COOKIE)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bearer_parsing() {
    assert_eq!(bearer_token("Bearer abc"), Some("abc"));
    assert_eq!(bearer_token("bearer  abc "), Some("abc"));
    assert_eq!(bearer_token("Basic abc"), None);
    assert_eq!(bearer_token("Bearer "), None);
    assert_eq!(bearer_token("Bearer"), None);
  }

  #[test]
  fn header_beats_cookie() {
    assert_eq!(request_token(Some("Bearer h"), Some("token=c")), Some("h"));
    assert_eq!(request_token(None, Some("locale=hi; token=c")), Some("c"));
    assert_eq!(request_token(Some("Basic x"), Some("token=c")), Some("c"));
    assert_eq!(request_token(None, Some("token=")), None);
    assert_eq!(request_token(None, None), None);
  }

  #[test]
  fn static_tokens() {
    let verifier = StaticTokens::new(["secret".to_string(), String::new()]);
    assert!(verifier.verify("secret"));
    assert!(!verifier.verify(""));
    assert!(!verifier.verify("other"));
    assert!(AcceptAll.verify("anything"));
  }
}
