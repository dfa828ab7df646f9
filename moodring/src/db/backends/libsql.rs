use async_trait::async_trait;

use crate::db::connection::Database;
use crate::db::repository::{MessageRepository, SchemaRepository};
use crate::db::traits::{DatabaseBackend, MessageSource, SchemaStore};
use crate::error::Result;
use crate::models::{Message, TableSchema};

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SchemaStore for LibSqlBackend {
    async fn list_tables(&self) -> Result<Vec<TableSchema>> {
        let conn = self.db.connect().await?;
        SchemaRepository::list_tables(&conn).await
    }
}

#[async_trait]
impl MessageSource for LibSqlBackend {
    async fn load_messages(&self, limit: Option<u64>) -> Result<Vec<Message>> {
        let conn = self.db.connect().await?;
        MessageRepository::load(&conn, limit).await
    }
}

impl DatabaseBackend for LibSqlBackend {}
