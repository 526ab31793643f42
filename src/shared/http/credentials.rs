// src/shared/http/credentials.rs
use std::fmt;

/// Session cookies issued by the portfolio API at login, replayed on every
/// authenticated call (the server-side equivalent of `credentials: "include"`).
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(String);

impl Credentials {
    /// Builds the `Cookie` header value out of raw `Set-Cookie` header values.
    ///
    /// Only the leading `name=value` pair of each header is kept; attributes
    /// such as `Path` or `HttpOnly` mean nothing to the upstream server.
    pub fn from_set_cookie<I, S>(headers: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pairs: Vec<String> = headers
            .into_iter()
            .filter_map(|raw| {
                let pair = raw.as_ref().split(';').next()?.trim();
                pair.contains('=').then(|| pair.to_string())
            })
            .collect();

        if pairs.is_empty() {
            None
        } else {
            Some(Self(pairs.join("; ")))
        }
    }

    pub fn from_header_value(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn header_value(&self) -> &str {
        &self.0
    }
}

// Cookie values never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(***)")
    }
}
