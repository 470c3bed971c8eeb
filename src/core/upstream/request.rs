//! Outgoing request description.

/// A provider-relative GET request: path segments plus query parameters.
///
/// Built fresh from each set of validated tool parameters. Optional values
/// that were left unset never make it into the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl UpstreamRequest {
    /// Create a request for the given path segments.
    ///
    /// Segments are percent-encoded individually when the URL is built, so a
    /// user-supplied coin id cannot escape its position in the path.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn optional_query(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Provider-relative path, e.g. `/coins/bitcoin/ohlc`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Look up a query parameter by key.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
