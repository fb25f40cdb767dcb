//! Generic data access over a single SQLite file.
//!
//! Every operation opens its own connection, runs one statement (or one
//! batch) and closes the connection again before returning, whether the
//! statement succeeded or not. Table names, column names, WHERE and ORDER BY
//! fragments are interpolated verbatim; only values are bound as parameters.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::NaiveDateTime;
use sqlx::{
    query::Query,
    sqlite::{Sqlite, SqliteArguments, SqliteConnectOptions, SqliteConnection, SqliteQueryResult, SqliteRow},
    Column, Connection, Row, TypeInfo, ValueRef,
};
use tracing::{debug, warn};

use crate::{
    db::{
        sqlite::connect_options,
        value::{FieldMap, Record, SqlValue},
    },
    errors::DalError,
};

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Key column used by [`Dal::select_by_id`].
pub const DEFAULT_ID_COLUMN: &str = "id";

#[derive(Debug, Clone)]
pub struct Dal {
    db_path: PathBuf,
    options: SqliteConnectOptions,
}

impl Dal {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        let db_path = db_path.into();
        let options = connect_options(&db_path);
        Dal { db_path, options }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens a fresh connection to the configured database file.
    pub async fn connect(&self) -> Result<SqliteConnection, DalError> {
        let conn = SqliteConnection::connect_with(&self.options).await?;
        Ok(conn)
    }

    /// Runs a read statement and materializes every returned row.
    pub async fn execute_query(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Record>, DalError> {
        debug!(sql = %sql, params = params.len(), "execute_query");

        let mut conn = self.connect().await?;
        let result = bind_params(sqlx::query(sql), params)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;

        decode_rows(&result?)
    }

    /// First column of the first row, `None` when the statement returned no rows.
    pub async fn execute_scalar(&self, sql: &str, params: &[SqlValue]) -> Result<Option<SqlValue>, DalError> {
        debug!(sql = %sql, params = params.len(), "execute_scalar");

        let mut conn = self.connect().await?;
        let result = bind_params(sqlx::query(sql), params)
            .fetch_optional(&mut conn)
            .await;
        release(conn).await;

        match result? {
            Some(row) if !row.is_empty() => Ok(Some(decode_value(&row, 0)?)),
            _ => Ok(None),
        }
    }

    /// Runs a statement for its effect and returns the affected row count.
    pub async fn execute_non_query(&self, sql: &str, params: &[SqlValue]) -> Result<u64, DalError> {
        debug!(sql = %sql, params = params.len(), "execute_non_query");

        let result = self.execute(sql, params).await?;
        Ok(result.rows_affected())
    }

    /// Runs `sql` once per parameter tuple inside one transaction.
    ///
    /// Returns the sum of the affected counts of every execution. Any failing
    /// tuple rolls the whole batch back.
    pub async fn execute_many(&self, sql: &str, params_list: &[Vec<SqlValue>]) -> Result<u64, DalError> {
        debug!(sql = %sql, batch = params_list.len(), "execute_many");

        if params_list.is_empty() {
            return Ok(0);
        }

        let mut conn = self.connect().await?;
        let result = run_batch(&mut conn, sql, params_list).await;
        release(conn).await;

        result
    }

    pub async fn create_table(&self, table_name: &str, schema: &str) -> Result<(), DalError> {
        let sql = format!("CREATE TABLE IF NOT EXISTS {table_name} ({schema})");
        self.execute_non_query(&sql, &[]).await?;
        Ok(())
    }

    pub async fn drop_table(&self, table_name: &str) -> Result<(), DalError> {
        let sql = format!("DROP TABLE IF EXISTS {table_name}");
        self.execute_non_query(&sql, &[]).await?;
        Ok(())
    }

    /// Inserts one row and returns the rowid SQLite assigned to it.
    pub async fn insert(&self, table_name: &str, fields: &FieldMap) -> Result<i64, DalError> {
        let columns = fields.columns().collect::<Vec<_>>().join(", ");
        let placeholders = vec!["?"; fields.len()].join(", ");
        let sql = format!("INSERT INTO {table_name} ({columns}) VALUES ({placeholders})");
        let params: Vec<SqlValue> = fields.values().cloned().collect();

        debug!(sql = %sql, "insert");

        let result = self.execute(&sql, &params).await?;
        Ok(result.last_insert_rowid())
    }

    /// `where_clause` is raw SQL without the `WHERE` keyword; it must carry its
    /// own `?` placeholders for `where_params`, which bind after the field values.
    pub async fn update(
        &self,
        table_name: &str,
        fields: &FieldMap,
        where_clause: &str,
        where_params: &[SqlValue],
    ) -> Result<u64, DalError> {
        let set_clause = fields
            .columns()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {table_name} SET {set_clause} WHERE {where_clause}");
        let params: Vec<SqlValue> = fields
            .values()
            .chain(where_params)
            .cloned()
            .collect();

        self.execute_non_query(&sql, &params).await
    }

    pub async fn delete(
        &self,
        table_name: &str,
        where_clause: &str,
        where_params: &[SqlValue],
    ) -> Result<u64, DalError> {
        let sql = format!("DELETE FROM {table_name} WHERE {where_clause}");
        self.execute_non_query(&sql, where_params).await
    }

    /// Every row of `table_name`, with `order_by` appended verbatim when given.
    pub async fn select_all(&self, table_name: &str, order_by: Option<&str>) -> Result<Vec<Record>, DalError> {
        let mut sql = format!("SELECT * FROM {table_name}");
        if let Some(order_by) = order_by.filter(|o| !o.trim().is_empty()) {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }
        self.execute_query(&sql, &[]).await
    }

    /// Looks a row up by the [`DEFAULT_ID_COLUMN`].
    pub async fn select_by_id(
        &self,
        table_name: &str,
        id_value: impl Into<SqlValue>,
    ) -> Result<Option<Record>, DalError> {
        self.select_by_key(table_name, DEFAULT_ID_COLUMN, id_value).await
    }

    pub async fn select_by_key(
        &self,
        table_name: &str,
        id_column: &str,
        id_value: impl Into<SqlValue>,
    ) -> Result<Option<Record>, DalError> {
        let sql = format!("SELECT * FROM {table_name} WHERE {id_column} = ?");
        let rows = self.execute_query(&sql, &[id_value.into()]).await?;
        Ok(rows.into_iter().next())
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<SqliteQueryResult, DalError> {
        let mut conn = self.connect().await?;
        let result = bind_params(sqlx::query(sql), params)
            .execute(&mut conn)
            .await;
        release(conn).await;

        Ok(result?)
    }
}

async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close database connection");
    }
}

async fn run_batch(
    conn: &mut SqliteConnection,
    sql: &str,
    params_list: &[Vec<SqlValue>],
) -> Result<u64, DalError> {
    let mut tx = conn.begin().await?;
    let mut affected = 0;

    for params in params_list {
        affected += bind_params(sqlx::query(sql), params)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    tx.commit().await?;
    Ok(affected)
}

fn bind_params<'q>(query: SqliteQuery<'q>, params: &[SqlValue]) -> SqliteQuery<'q> {
    params.iter().cloned().fold(query, bind_value)
}

fn bind_value<'q>(query: SqliteQuery<'q>, value: SqlValue) -> SqliteQuery<'q> {
    match value {
        SqlValue::Null => query.bind(None::<String>),
        SqlValue::Integer(v) => query.bind(v),
        SqlValue::Real(v) => query.bind(v),
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Blob(v) => query.bind(v),
        SqlValue::Timestamp(v) => query.bind(v),
    }
}

fn decode_rows(rows: &[SqliteRow]) -> Result<Vec<Record>, DalError> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };

    let columns: Arc<[String]> = first
        .columns()
        .iter()
        .map(|col| col.name().to_owned())
        .collect();

    rows.iter()
        .map(|row| -> Result<Record, DalError> {
            let values = (0..row.len())
                .map(|idx| decode_value(row, idx))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Record::new(columns.clone(), values))
        })
        .collect()
}

/// Decodes by the value's storage class. Text stored in a column declared as
/// a date or timestamp comes back as `Timestamp` when it parses as one.
fn decode_value(row: &SqliteRow, idx: usize) -> Result<SqlValue, DalError> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }

    let value = match raw.type_info().name() {
        "INTEGER" | "BOOLEAN" => SqlValue::Integer(row.try_get(idx)?),
        "REAL" => SqlValue::Real(row.try_get(idx)?),
        "BLOB" => SqlValue::Blob(row.try_get(idx)?),
        _ if is_temporal_column(row, idx) => match row.try_get::<NaiveDateTime, _>(idx) {
            Ok(ts) => SqlValue::Timestamp(ts),
            Err(_) => SqlValue::Text(row.try_get(idx)?),
        },
        _ => SqlValue::Text(row.try_get(idx)?),
    };
    Ok(value)
}

fn is_temporal_column(row: &SqliteRow, idx: usize) -> bool {
    matches!(
        row.columns()[idx].type_info().name(),
        "DATETIME" | "TIMESTAMP" | "DATE"
    )
}
