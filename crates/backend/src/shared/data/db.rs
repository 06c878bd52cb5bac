use contracts::domain::a001_barang::Barang;
use contracts::domain::common::AggregateRoot;
use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/app.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let db_url = sqlite_url(&absolute_path.to_string_lossy());
    tracing::info!("Connecting to database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Build a sqlite URL that also works for Windows drive paths
fn sqlite_url(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Create the tables if they do not exist yet
pub async fn ensure_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    let create_barang = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id_barang INTEGER PRIMARY KEY AUTOINCREMENT,
            nama_barang TEXT NOT NULL,
            kategori TEXT NOT NULL,
            stok_awal INTEGER NOT NULL DEFAULT 0,
            satuan TEXT NOT NULL,
            created_at TEXT
        );
        "#,
        Barang::full_name()
    );
    conn.execute(Statement::from_string(DatabaseBackend::Sqlite, create_barang))
        .await?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
pub(crate) async fn test_connection() -> DatabaseConnection {
    let mut opts = sea_orm::ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(opts).await.unwrap();
    ensure_schema(&conn).await.unwrap();
    conn
}

/// Make `get_connection()` hand out an in-memory database, for tests that
/// go through the handlers
#[cfg(test)]
pub(crate) async fn install_test_connection() {
    if DB_CONN.get().is_none() {
        let _ = DB_CONN.set(test_connection().await);
    }
}
