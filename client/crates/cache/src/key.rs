//! Query Keys
//!
//! A query key identifies one cached read: the request path plus any
//! parameters that shape the response. Parameters are kept sorted so
//! the same logical request always renders to the same key.

use std::fmt;

/// Cache key for one REST read
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    path: String,
    params: Vec<(String, String)>,
}

impl QueryKey {
    /// Key for a bare path, e.g. `QueryKey::new("/api/transactions")`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a shaping parameter, keeping parameters sorted by name
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.params.binary_search_by(|(n, _)| n.as_str().cmp(&name)) {
            Ok(idx) => self.params[idx] = (name, value),
            Err(idx) => self.params.insert(idx, (name, value)),
        }
        self
    }

    /// The request path component
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this key belongs to the given path prefix
    ///
    /// Used by prefix invalidation: `/api/offers` matches both the
    /// bare list key and every parameterized variant of it.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        self.path.starts_with(prefix)
    }

    /// Render to the request path + query string
    pub fn render(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .params
            .iter()
            .map(|(n, v)| format!("{}={}", n, v))
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
