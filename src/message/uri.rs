//! Structured URI.

use std::fmt;

/// A URI decomposed into its transport-relevant parts.
///
/// Every component is a plain string; anything that could not be derived
/// stays empty. The scheme is never empty — it defaults to `"http"`.
/// The port is kept as text because it is carried straight through from
/// transport fields that never validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    pub(crate) scheme: String,
    pub(crate) host: String,
    pub(crate) port: String,
    pub(crate) path: String,
    pub(crate) query: String,
}

impl Uri {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// `host[:port]`, empty when no host was derived.
    pub fn authority(&self) -> String {
        if self.host.is_empty() {
            return String::new();
        }
        if self.port.is_empty() {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for Uri {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: String::new(),
            port: String::new(),
            path: String::new(),
            query: String::new(),
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.host.is_empty() {
            write!(f, "{}://{}", self.scheme, self.authority())?;
        }
        write!(f, "{}", self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_http_scheme_only() {
        let uri = Uri::default();
        assert_eq!(uri.scheme(), "http");
        assert_eq!(uri.host(), "");
        assert_eq!(uri.port(), "");
        assert_eq!(uri.path(), "");
        assert_eq!(uri.query(), "");
    }

    #[test]
    fn test_display_recomposes() {
        let uri = Uri {
            scheme: "https".into(),
            host: "example.com".into(),
            port: "8443".into(),
            path: "/a/b".into(),
            query: "x=1".into(),
        };
        assert_eq!(uri.to_string(), "https://example.com:8443/a/b?x=1");
    }

    #[test]
    fn test_display_without_host_is_origin_form() {
        let uri = Uri {
            path: "/p".into(),
            query: "y=2".into(),
            ..Uri::default()
        };
        assert_eq!(uri.to_string(), "/p?y=2");
    }
}
