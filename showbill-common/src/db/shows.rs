//! Show database operations

use crate::db::artists::artist_exists;
use crate::db::models::{Show, ShowInput, ShowListing};
use crate::db::venues::venue_exists;
use crate::{Error, Result};
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Insert a show after checking that both parents exist
pub async fn create_show(pool: &SqlitePool, input: &ShowInput) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let mut errors = Vec::new();
    if !venue_exists(&mut tx, input.venue_id).await? {
        errors.push(format!("Venue {} does not exist", input.venue_id));
    }
    if !artist_exists(&mut tx, input.artist_id).await? {
        errors.push(format!("Artist {} does not exist", input.artist_id));
    }
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(input.venue_id)
    .bind(input.artist_id)
    .bind(input.start_time)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        "Created show {} (venue {}, artist {}, {})",
        id, input.venue_id, input.artist_id, input.start_time
    );
    Ok(id)
}

pub async fn get_show(pool: &SqlitePool, id: i64) -> Result<Option<Show>> {
    let row = sqlx::query("SELECT id, venue_id, artist_id, start_time FROM shows WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(Show {
            id: row.try_get("id")?,
            venue_id: row.try_get("venue_id")?,
            artist_id: row.try_get("artist_id")?,
            start_time: row.try_get("start_time")?,
        })),
        None => Ok(None),
    }
}

/// Every show with its venue and artist, ordered by start time
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(
        r#"
        SELECT s.venue_id, v.name AS venue_name, s.artist_id, a.name AS artist_name,
               a.image_link AS artist_image_link, s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time, s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(ShowListing {
                venue_id: row.try_get("venue_id")?,
                venue_name: row.try_get("venue_name")?,
                artist_id: row.try_get("artist_id")?,
                artist_name: row.try_get("artist_name")?,
                artist_image_link: row.try_get("artist_image_link")?,
                start_time: row.try_get("start_time")?,
            })
        })
        .collect()
}
