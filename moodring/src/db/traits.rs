use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Message, TableSchema};

/// Schema introspection of the underlying message store.
#[async_trait]
pub trait SchemaStore: Send + Sync {
    async fn list_tables(&self) -> Result<Vec<TableSchema>>;
}

/// Source of message rows for the scoring pipeline.
///
/// Implementations validate rows before returning them: every message has a
/// partner id and a timestamp.
#[async_trait]
pub trait MessageSource: Send + Sync {
    async fn load_messages(&self, limit: Option<u64>) -> Result<Vec<Message>>;
}

/// Unified backend used by the CLI.
pub trait DatabaseBackend: SchemaStore + MessageSource {}
