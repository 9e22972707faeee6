use crate::db::models::{NewService, NewUser, Resident, Service, User};
use crate::db::schema::SQLITE_INIT;
use crate::error::DirectoryError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Maximum rows returned by a directory search.
pub const SEARCH_LIMIT: i64 = 10;

const RESIDENT_COLUMNS: &str = "id, name, email, house_number, phone_number";
const SERVICE_COLUMNS: &str = "id, name, email, phone_number, address";

#[derive(Clone)]
pub struct DirectoryStorage {
    pool: SqlitePool,
}

impl DirectoryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if absent) and initialize the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DirectoryError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        info!(database_url, "directory store ready");
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), DirectoryError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, password, house_number, phone_number
               FROM user WHERE email = ? LIMIT 1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Insert a user and return the row id. A UNIQUE violation on `email`
    /// surfaces as `DuplicateEmail`.
    pub async fn insert_user(&self, user: NewUser) -> Result<i64, DirectoryError> {
        let result = sqlx::query(
            r#"INSERT INTO user (name, email, password, house_number, phone_number)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.house_number)
        .bind(user.phone_number)
        .execute(&self.pool)
        .await
        .map_err(DirectoryError::from);

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if e.is_unique_violation() => Err(DirectoryError::DuplicateEmail),
            Err(e) => Err(e),
        }
    }

    pub async fn get_resident(&self, id: i64) -> Result<Resident, DirectoryError> {
        sqlx::query_as::<_, Resident>(&format!(
            "SELECT {RESIDENT_COLUMNS} FROM user WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DirectoryError::NotFound)
    }

    /// Up to [`SEARCH_LIMIT`] residents whose name, email or house number
    /// contains `query`, case-insensitively. An empty query lists the first rows.
    ///
    /// The query is lowercased with full Unicode rules and matched against
    /// `lower(column)`.
    pub async fn search_residents(&self, query: &str) -> Result<Vec<Resident>, DirectoryError> {
        let rows = if query.is_empty() {
            sqlx::query_as::<_, Resident>(&format!(
                "SELECT {RESIDENT_COLUMNS} FROM user ORDER BY id LIMIT ?"
            ))
            .bind(SEARCH_LIMIT)
            .fetch_all(&self.pool)
            .await?
        } else {
            let pattern = like_pattern(&query.to_lowercase());
            sqlx::query_as::<_, Resident>(&format!(
                r#"SELECT {RESIDENT_COLUMNS} FROM user
                   WHERE lower(name) LIKE ?1 ESCAPE '\'
                      OR lower(email) LIKE ?1 ESCAPE '\'
                      OR lower(house_number) LIKE ?1 ESCAPE '\'
                   ORDER BY id LIMIT ?2"#
            ))
            .bind(pattern)
            .bind(SEARCH_LIMIT)
            .fetch_all(&self.pool)
            .await?
        };
        Ok(rows)
    }

    pub async fn count_users(&self) -> Result<i64, DirectoryError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    pub async fn insert_service(&self, service: NewService) -> Result<i64, DirectoryError> {
        let done = sqlx::query(
            r#"INSERT INTO service (name, email, phone_number, address)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(service.name)
        .bind(service.email)
        .bind(service.phone_number)
        .bind(service.address)
        .execute(&self.pool)
        .await?;
        Ok(done.last_insert_rowid())
    }

    pub async fn get_service(&self, id: i64) -> Result<Service, DirectoryError> {
        sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM service WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DirectoryError::NotFound)
    }

    /// Same contract as [`Self::search_residents`], over name, email, phone
    /// number and address.
    pub async fn search_services(&self, query: &str) -> Result<Vec<Service>, DirectoryError> {
        let rows = if query.is_empty() {
            sqlx::query_as::<_, Service>(&format!(
                "SELECT {SERVICE_COLUMNS} FROM service ORDER BY id LIMIT ?"
            ))
            .bind(SEARCH_LIMIT)
            .fetch_all(&self.pool)
            .await?
        } else {
            let pattern = like_pattern(&query.to_lowercase());
            sqlx::query_as::<_, Service>(&format!(
                r#"SELECT {SERVICE_COLUMNS} FROM service
                   WHERE lower(name) LIKE ?1 ESCAPE '\'
                      OR lower(email) LIKE ?1 ESCAPE '\'
                      OR lower(phone_number) LIKE ?1 ESCAPE '\'
                      OR lower(address) LIKE ?1 ESCAPE '\'
                   ORDER BY id LIMIT ?2"#
            ))
            .bind(pattern)
            .bind(SEARCH_LIMIT)
            .fetch_all(&self.pool)
            .await?
        };
        Ok(rows)
    }

    pub async fn count_services(&self) -> Result<i64, DirectoryError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM service")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }
}

/// Wrap `query` as a `LIKE` substring pattern, escaping the wildcards so user
/// input always matches literally.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
