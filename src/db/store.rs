use crate::types::{AppError, Result};
use chrono::Utc;
use libsql::{Builder, Connection, Database};

/// Relational store for user and kitten records.
pub struct StoreClient {
    db: Database,
}

impl StoreClient {
    /// Creates an in-memory store (ephemeral, lost on drop).
    pub async fn new_memory() -> Result<Self> {
        Self::new_local(":memory:").await
    }

    /// Creates a file-backed SQLite store at the given path.
    pub async fn new_local(path: &str) -> Result<Self> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {}", e)))?;

        let client = Self { db };
        client.initialize_schema().await?;

        Ok(client)
    }

    pub fn connection(&self) -> Result<Connection> {
        self.db
            .connect()
            .map_err(|e| AppError::Database(format!("Failed to get connection: {}", e)))
    }

    async fn initialize_schema(&self) -> Result<()> {
        let conn = self.connection()?;

        // Users table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create users table: {}", e)))?;

        // Kittens table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kittens (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                color TEXT NOT NULL,
                owner_id TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (owner_id) REFERENCES users(id)
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create kittens table: {}", e)))?;

        Ok(())
    }

    // User operations

    pub async fn create_user(&self, id: &str, username: &str, password_hash: &str) -> Result<()> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        conn.execute(
            "INSERT INTO users (id, username, password_hash, created_at)
             VALUES (?, ?, ?, ?)",
            (id, username, password_hash, now),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create user: {}", e)))?;

        Ok(())
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, username, password_hash, created_at
                 FROM users WHERE username = ?",
                [username],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query user: {}", e)))?;

        if let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Ok(Some(User {
                id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
                username: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
                password_hash: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
                created_at: row.get(3).map_err(|e| AppError::Database(e.to_string()))?,
            }))
        } else {
            Ok(None)
        }
    }

    // Kitten operations

    /// Inserts a kitten and returns its assigned id.
    pub async fn create_kitten(
        &self,
        name: &str,
        age: i64,
        color: &str,
        owner_id: &str,
    ) -> Result<i64> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        conn.execute(
            "INSERT INTO kittens (name, age, color, owner_id, created_at)
             VALUES (?, ?, ?, ?, ?)",
            (name, age, color, owner_id, now),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create kitten: {}", e)))?;

        Ok(conn.last_insert_rowid())
    }

    pub async fn get_kitten(&self, id: i64) -> Result<Option<Kitten>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, name, age, color, owner_id, created_at
                 FROM kittens WHERE id = ?",
                [id],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query kitten: {}", e)))?;

        if let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Ok(Some(Kitten {
                id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
                name: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
                age: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
                color: row.get(3).map_err(|e| AppError::Database(e.to_string()))?,
                owner_id: row.get(4).map_err(|e| AppError::Database(e.to_string()))?,
                created_at: row.get(5).map_err(|e| AppError::Database(e.to_string()))?,
            }))
        } else {
            Ok(None)
        }
    }

    pub async fn delete_kitten(&self, id: i64) -> Result<()> {
        let conn = self.connection()?;

        conn.execute("DELETE FROM kittens WHERE id = ?", [id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete kitten: {}", e)))?;

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: i64,
}

#[derive(Debug, Clone)]
pub struct Kitten {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub color: String,
    pub owner_id: String,
    pub created_at: i64,
}
