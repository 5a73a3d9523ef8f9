use uuid::Uuid;

/// Settings for assembling a structured query.
///
/// - `query_id` identifies the query node; a fresh UUID by default.
/// - `table_name` is the source table, if the page has picked one.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Id written into the query message
    pub query_id: String,
    /// Source table the query reads from
    pub table_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { query_id: Uuid::new_v4().to_string(), table_name: None }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: config for a known table with a generated id.
    pub fn table(table_name: &str) -> Self {
        Self::default().with_table(table_name)
    }

    pub fn with_query_id(mut self, query_id: &str) -> Self {
        self.query_id = query_id.to_string();
        self
    }

    pub fn with_table(mut self, table_name: &str) -> Self {
        self.table_name = Some(table_name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids_are_unique() {
        let a = Config::new();
        let b = Config::new();
        assert_ne!(a.query_id, b.query_id);
        assert!(a.table_name.is_none());
    }

    #[test]
    fn test_builders() {
        let config = Config::table("slice").with_query_id("q1");
        assert_eq!(config.query_id, "q1");
        assert_eq!(config.table_name.as_deref(), Some("slice"));
    }
}
