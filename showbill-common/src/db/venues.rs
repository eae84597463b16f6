//! Venue database operations
//!
//! Every write runs inside its own transaction. An early return drops the
//! transaction guard, which rolls the transaction back.

use crate::db::models::{Venue, VenueInput};
use crate::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::info;

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, facebook_link, \
     image_link, website_link, seeking_talent, description";

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let genres: Json<Vec<String>> = row.try_get("genres")?;

    Ok(Venue {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        address: row.try_get("address")?,
        phone: row.try_get("phone")?,
        genres: genres.0,
        facebook_link: row.try_get("facebook_link")?,
        image_link: row.try_get("image_link")?,
        website_link: row.try_get("website_link")?,
        seeking_talent: row.try_get("seeking_talent")?,
        description: row.try_get("description")?,
    })
}

/// Load venue by id
pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let row = sqlx::query(&format!("SELECT {} FROM venues WHERE id = ?", VENUE_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(venue_from_row).transpose()
}

/// Check whether a venue exists, on an already-acquired connection
pub async fn venue_exists(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(id)
        .fetch_one(conn)
        .await?;

    Ok(exists)
}

/// Number of shows (past and upcoming) booked at a venue
pub async fn venue_show_count(conn: &mut SqliteConnection, id: i64) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows WHERE venue_id = ?")
        .bind(id)
        .fetch_one(conn)
        .await?;

    Ok(count)
}

/// Insert a new venue, returning its generated id
pub async fn create_venue(pool: &SqlitePool, input: &VenueInput) -> Result<i64> {
    input.validate().map_err(Error::Validation)?;

    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, genres, facebook_link,
            image_link, website_link, seeking_talent, description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(Json(&input.genres))
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(input.seeking_talent)
    .bind(&input.description)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!("Created venue {} ({})", id, input.name);
    Ok(id)
}

/// Overwrite every mutable field of an existing venue
pub async fn update_venue(pool: &SqlitePool, id: i64, input: &VenueInput) -> Result<()> {
    let mut tx = pool.begin().await?;

    // Missing record outranks invalid input
    if !venue_exists(&mut tx, id).await? {
        return Err(Error::NotFound(format!("Venue {}", id)));
    }
    input.validate().map_err(Error::Validation)?;

    sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
            facebook_link = ?, image_link = ?, website_link = ?,
            seeking_talent = ?, description = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(Json(&input.genres))
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(input.seeking_talent)
    .bind(&input.description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!("Updated venue {} ({})", id, input.name);
    Ok(())
}

/// Delete a venue that has no shows
///
/// A venue with booked shows is rejected with [`Error::Conflict`]; shows are
/// never removed implicitly.
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    if !venue_exists(&mut tx, id).await? {
        return Err(Error::NotFound(format!("Venue {}", id)));
    }

    let shows = venue_show_count(&mut tx, id).await?;
    if shows > 0 {
        return Err(Error::Conflict(format!(
            "Venue {} still has {} show(s) and cannot be deleted",
            id, shows
        )));
    }

    sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!("Deleted venue {}", id);
    Ok(())
}
