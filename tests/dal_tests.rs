
use portfolio_site::{
    db::{Dal, FieldMap, SqlValue},
    errors::DalError,
};
use test_utils::*;

fn titles(rows: &[portfolio_site::db::Record]) -> Vec<String> {
    rows.iter()
        .map(|row| row.text("Title").unwrap_or_default().to_string())
        .collect()
}

#[actix_rt::test]
async fn execute_query_returns_active_rows() {
    let (_dir, dal) = seeded_dal().await;

    let rows = dal
        .execute_query("SELECT * FROM projects WHERE IsActive = 1", &[])
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
}

#[actix_rt::test]
async fn execute_query_binds_positional_params() {
    let (_dir, dal) = seeded_dal().await;

    let rows = dal
        .execute_query("SELECT * FROM projects WHERE Title = ?", &["Test Project 1".into()])
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text("Title"), Some("Test Project 1"));
    assert_eq!(rows[0].text("title"), Some("Test Project 1"));
}

#[actix_rt::test]
async fn execute_scalar_counts_rows() {
    let (_dir, dal) = seeded_dal().await;

    let count = dal.execute_scalar("SELECT COUNT(*) FROM projects", &[]).await.unwrap();

    assert_eq!(count, Some(SqlValue::Integer(3)));
}

#[actix_rt::test]
async fn execute_scalar_without_rows_is_absent() {
    let (_dir, dal) = seeded_dal().await;

    let result = dal
        .execute_scalar("SELECT Title FROM projects WHERE ProjectID = ?", &[9999.into()])
        .await
        .unwrap();

    assert_eq!(result, None);
}

#[actix_rt::test]
async fn insert_then_select_returns_the_same_fields() {
    let (_dir, dal) = seeded_dal().await;

    let fields = FieldMap::new()
        .with("Title", "Brand New Project")
        .with("Description", "Testing insert functionality")
        .with("ImageFileName", "brand_new.jpg")
        .with("TechnologiesUsed", "Rust, SQLite")
        .with("ProjectURL", "https://example.com")
        .with("GitHubURL", "https://github.com/test")
        .with("IsActive", 1);

    let id = dal.insert("projects", &fields).await.unwrap();
    assert!(id > 0);

    let row = dal
        .select_by_key("projects", "ProjectID", id)
        .await
        .unwrap()
        .expect("inserted row should be found");

    for (column, value) in fields.iter() {
        assert_eq!(row.get(column), Some(value), "column {column}");
    }
    assert!(row.timestamp("DateCreated").is_some());
}

#[actix_rt::test]
async fn insert_minimal_fields_uses_column_defaults() {
    let (_dir, dal) = seeded_dal().await;

    let id = dal
        .insert("projects", &FieldMap::new().with("Title", "Minimal Project"))
        .await
        .unwrap();

    let row = dal.select_by_key("projects", "ProjectID", id).await.unwrap().unwrap();
    assert_eq!(row.integer("IsActive"), Some(1));
    assert_eq!(row.get("Description"), Some(&SqlValue::Null));
}

#[actix_rt::test]
async fn update_touches_only_the_matching_row() {
    let (_dir, dal) = seeded_dal().await;

    let rows = dal
        .execute_query("SELECT * FROM projects WHERE Title = ?", &["Test Project 1".into()])
        .await
        .unwrap();
    let id = rows[0].integer("ProjectID").unwrap();

    let changes = FieldMap::new()
        .with("Title", "Updated Title")
        .with("TechnologiesUsed", "New Tech Stack")
        .with("IsActive", 0);
    let affected = dal
        .update("projects", &changes, "ProjectID = ?", &[id.into()])
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let row = dal.select_by_key("projects", "ProjectID", id).await.unwrap().unwrap();
    assert_eq!(row.text("Title"), Some("Updated Title"));
    assert_eq!(row.text("TechnologiesUsed"), Some("New Tech Stack"));
    assert_eq!(row.integer("IsActive"), Some(0));

    let missed = dal
        .update("projects", &changes, "ProjectID = ?", &[99999.into()])
        .await
        .unwrap();
    assert_eq!(missed, 0);
}

#[actix_rt::test]
async fn delete_removes_matching_rows() {
    let (_dir, dal) = seeded_dal().await;

    let affected = dal
        .delete("projects", "Title = ?", &["Test Project 1".into()])
        .await
        .unwrap();
    assert_eq!(affected, 1);
    assert_eq!(count_projects(&dal).await, 2);
}

#[actix_rt::test]
async fn delete_by_active_flag_hits_both_active_fixtures() {
    let (_dir, dal) = seeded_dal().await;

    let affected = dal.delete("projects", "IsActive = ?", &[1.into()]).await.unwrap();

    assert_eq!(affected, 2);
}

#[actix_rt::test]
async fn select_all_matches_count() {
    let (_dir, dal) = seeded_dal().await;

    let rows = dal.select_all("projects", None).await.unwrap();

    assert_eq!(rows.len() as i64, count_projects(&dal).await);
}

#[actix_rt::test]
async fn select_all_appends_order_by() {
    let (_dir, dal) = seeded_dal().await;

    let rows = dal.select_all("projects", Some("Title ASC")).await.unwrap();

    assert_eq!(titles(&rows), vec!["Inactive Project", "Test Project 1", "Test Project 2"]);
}

#[actix_rt::test]
async fn select_by_id_uses_id_column_by_default() {
    let (_dir, dal) = seeded_dal().await;
    dal.create_table("tags", "id INTEGER PRIMARY KEY, name TEXT").await.unwrap();
    let id = dal.insert("tags", &FieldMap::new().with("name", "rust")).await.unwrap();

    let found = dal.select_by_id("tags", id).await.unwrap().unwrap();
    assert_eq!(found.text("name"), Some("rust"));

    assert!(dal.select_by_id("tags", 99999).await.unwrap().is_none());
}

#[actix_rt::test]
async fn select_by_key_returns_none_when_missing() {
    let (_dir, dal) = seeded_dal().await;

    let row = dal.select_by_key("projects", "ProjectID", 99999).await.unwrap();

    assert!(row.is_none());
}

#[actix_rt::test]
async fn create_table_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let dal = Dal::new(dir.path().join("fresh.db"));

    dal.create_table("test_table", "id INTEGER PRIMARY KEY, name TEXT").await.unwrap();
    dal.create_table("test_table", "id INTEGER PRIMARY KEY, name TEXT").await.unwrap();

    let name = dal
        .execute_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
            &["test_table".into()],
        )
        .await
        .unwrap();
    assert_eq!(name, Some(SqlValue::Text("test_table".into())));
}

#[actix_rt::test]
async fn drop_table_tolerates_missing_tables() {
    let (_dir, dal) = seeded_dal().await;

    dal.create_table("temp_table", "id INTEGER PRIMARY KEY").await.unwrap();
    dal.drop_table("temp_table").await.unwrap();
    dal.drop_table("temp_table").await.unwrap();

    let name = dal
        .execute_scalar("SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'temp_table'", &[])
        .await
        .unwrap();
    assert_eq!(name, None);
}

#[actix_rt::test]
async fn execute_many_reports_the_total_affected_count() {
    let (_dir, dal) = seeded_dal().await;

    let batch: Vec<Vec<SqlValue>> = vec![
        vec!["Batch Project 1".into(), "First batch".into(), 1.into()],
        vec!["Batch Project 2".into(), "Second batch".into(), 1.into()],
        vec!["Batch Project 3".into(), "Third batch".into(), 0.into()],
    ];
    let affected = dal
        .execute_many("INSERT INTO projects (Title, Description, IsActive) VALUES (?, ?, ?)", &batch)
        .await
        .unwrap();
    assert_eq!(affected, 3);

    let rows = dal
        .execute_query("SELECT * FROM projects WHERE Title LIKE 'Batch%'", &[])
        .await
        .unwrap();
    assert_eq!(rows.len(), 3);

    let updated = dal
        .execute_many(
            "UPDATE projects SET IsActive = 0 WHERE Title LIKE ?",
            &[vec!["Test Project%".into()], vec!["Batch%".into()]],
        )
        .await
        .unwrap();
    assert_eq!(updated, 5);
}

#[actix_rt::test]
async fn execute_many_with_empty_batch_does_nothing() {
    let (_dir, dal) = seeded_dal().await;

    let affected = dal
        .execute_many("INSERT INTO projects (Title) VALUES (?)", &[])
        .await
        .unwrap();

    assert_eq!(affected, 0);
    assert_eq!(count_projects(&dal).await, 3);
}

#[actix_rt::test]
async fn execute_many_rolls_back_on_failure() {
    let (_dir, dal) = seeded_dal().await;

    let batch: Vec<Vec<SqlValue>> = vec![vec!["Kept?".into()], vec![SqlValue::Null]];
    let result = dal
        .execute_many("INSERT INTO projects (Title) VALUES (?)", &batch)
        .await;

    assert!(matches!(result, Err(DalError::Database(_))));
    assert_eq!(count_projects(&dal).await, 3);
}

#[actix_rt::test]
async fn missing_table_fails_on_every_call_path() {
    let (_dir, dal) = seeded_dal().await;
    let sql = "SELECT * FROM nonexistent_table";

    assert!(matches!(dal.execute_query(sql, &[]).await, Err(DalError::Database(_))));
    assert!(matches!(dal.execute_scalar(sql, &[]).await, Err(DalError::Database(_))));
    assert!(matches!(
        dal.execute_non_query("DELETE FROM nonexistent_table", &[]).await,
        Err(DalError::Database(_))
    ));
}

#[actix_rt::test]
async fn invalid_sql_is_a_database_error() {
    let (_dir, dal) = seeded_dal().await;

    let err = dal.execute_query("INVALID SQL QUERY", &[]).await.unwrap_err();

    assert!(err.to_string().starts_with("Database operation failed"));
    assert!(std::error::Error::source(&err).is_some());
}

#[actix_rt::test]
async fn constraint_violations_surface_unchanged() {
    let (_dir, dal) = seeded_dal().await;

    let result = dal
        .insert("projects", &FieldMap::new().with("Description", "no title"))
        .await;

    match result {
        Err(DalError::Database(sqlx::Error::Database(db_err))) => {
            assert!(db_err.message().contains("NOT NULL"));
        }
        other => panic!("expected a constraint violation, got {other:?}"),
    }
}

#[actix_rt::test]
async fn empty_field_map_is_rejected_by_the_engine() {
    let (_dir, dal) = seeded_dal().await;

    let result = dal.insert("projects", &FieldMap::new()).await;

    assert!(matches!(result, Err(DalError::Database(_))));
}
