use sqlx::{FromRow, SqliteConnection};

use crate::{amap::Coordinate, prelude::*};

/// The user's configured default origin.
///
/// Written only by `/setlocation`, read by every command that omits an
/// explicit origin. The stored coordinate is reused as-is, without
/// re-geocoding the name.
#[derive(Debug, Clone, FromRow)]
pub struct FixedLocation {
    pub name: String,
    pub coordinate: Coordinate,
}

pub struct FixedLocations<'a>(pub &'a mut SqliteConnection);

impl FixedLocations<'_> {
    /// Replace the fixed location as a whole value, last write wins.
    #[instrument(skip_all, fields(name = location.name))]
    pub async fn upsert(&mut self, location: &FixedLocation) -> Result {
        sqlx::query(
            // language=sqlite
            "INSERT INTO fixed_location (id, name, coordinate) VALUES (1, ?1, ?2)
             ON CONFLICT DO UPDATE SET name = ?1, coordinate = ?2",
        )
        .bind(&location.name)
        .bind(&location.coordinate)
        .execute(&mut *self.0)
        .await
        .with_context(|| format!("failed to store the fixed location `{}`", location.name))?;
        Ok(())
    }

    pub async fn fetch(&mut self) -> Result<Option<FixedLocation>> {
        sqlx::query_as(
            // language=sqlite
            "SELECT name, coordinate FROM fixed_location WHERE id = 1",
        )
        .fetch_optional(&mut *self.0)
        .await
        .context("failed to fetch the fixed location")
    }
}
