use axum::http::{header::AUTHORIZATION, HeaderMap};
use base64ct::{Base64, Encoding};

/// Login and secret taken from an `Authorization: Basic ...` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub pass: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("pass", &"***")
            .finish()
    }
}

impl Credentials {
    /// `None` when the header is absent, uses another scheme, or is malformed.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
        Self::parse_basic(value)
    }

    pub fn parse_basic(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let decoded = Base64::decode_vec(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (name, pass) = decoded.split_once(':')?;
        Some(Self {
            name: name.to_string(),
            pass: pass.to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) fn basic_header(name: &str, pass: &str) -> String {
    format!("Basic {}", Base64::encode_string(format!("{name}:{pass}").as_bytes()))
}
