//! Query string serialization
//!
//! The backend's parser expects array values in repeated-key form
//! (`statuses=ACTIVE&statuses=INACTIVE`). Bracket (`statuses[]=`) and comma
//! (`statuses=ACTIVE,INACTIVE`) forms are never produced.

use url::form_urlencoded;

/// Ordered list of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Empty parameter list
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a single `key=value` pair
    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Append `key=value` if the value is present
    #[must_use]
    pub fn with_opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Append one `key=value` pair per element; an empty sequence adds nothing
    #[must_use]
    pub fn with_repeated<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for value in values {
            self.push(key, value);
        }
        self
    }

    /// Append a single `key=value` pair in place
    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Whether no parameters are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pairs in insertion order
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// All values recorded for `key`, in order
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `application/x-www-form-urlencoded` rendering, without leading `?`
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_use_repeated_keys() {
        let params = QueryParams::new()
            .with("take", 10)
            .with_repeated("statuses", ["ACTIVE", "INACTIVE"]);

        let query = params.to_query_string();
        assert_eq!(query, "take=10&statuses=ACTIVE&statuses=INACTIVE");
        assert!(!query.contains("statuses[]"));
        assert!(!query.contains("ACTIVE,INACTIVE"));
    }

    #[test]
    fn empty_arrays_and_missing_values_are_omitted() {
        let params = QueryParams::new()
            .with_repeated("statuses", Vec::<String>::new())
            .with_opt::<String>("sort", None)
            .with("search", "");

        assert_eq!(params.to_query_string(), "search=");
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = QueryParams::new().with("search", "a&b c");
        assert_eq!(params.to_query_string(), "search=a%26b+c");
        assert_eq!(params.values("search").collect::<Vec<_>>(), vec!["a&b c"]);
    }
}
