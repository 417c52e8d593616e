pub mod fixed_location;

use std::path::Path;

use sqlx::{ConnectOptions, SqliteConnection, migrate::Migrator, sqlite::SqliteConnectOptions};
use tokio::sync::{Mutex, MutexGuard};

use crate::prelude::*;

static MIGRATOR: Migrator = sqlx::migrate!();

/// Bot state: the configured fixed location.
#[must_use]
pub struct Db(Mutex<SqliteConnection>);

impl Db {
    pub async fn new(path: &Path) -> Result<Self> {
        let mut connection = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(path)
            .connect()
            .await
            .with_context(|| format!("failed to open database `{path:?}`"))?;
        MIGRATOR
            .run(&mut connection)
            .await
            .context("failed to migrate the database")?;
        Ok(Self(Mutex::new(connection)))
    }

    pub async fn connection(&self) -> MutexGuard<'_, SqliteConnection> {
        self.0.lock().await
    }
}
