use libsql::Connection;

use crate::error::Result;
use crate::models::TableSchema;

pub struct SchemaRepository;

impl SchemaRepository {
    pub async fn list_tables(conn: &Connection) -> Result<Vec<TableSchema>> {
        let mut rows = conn
            .query(
                "SELECT name, sql FROM sqlite_schema WHERE type = 'table' ORDER BY name",
                (),
            )
            .await?;

        let mut tables = Vec::new();
        while let Some(row) = rows.next().await? {
            tables.push(TableSchema {
                name: row.get(0)?,
                sql: row.get(1)?,
            });
        }

        Ok(tables)
    }
}
