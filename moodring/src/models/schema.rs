use serde::{Deserialize, Serialize};

/// A table as listed in `sqlite_schema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub sql: Option<String>,
}

impl TableSchema {
    /// The `CREATE TABLE` statement with one column definition per line.
    pub fn pretty_sql(&self) -> String {
        match &self.sql {
            Some(sql) => sql.replace(',', ",\n"),
            None => String::new(),
        }
    }
}
