//! Artist database operations

use crate::db::models::{Artist, ArtistInput, NamedRecord};
use crate::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::info;

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, facebook_link, \
     image_link, website_link, seeking_venue, description";

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let genres: Json<Vec<String>> = row.try_get("genres")?;

    Ok(Artist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        genres: genres.0,
        facebook_link: row.try_get("facebook_link")?,
        image_link: row.try_get("image_link")?,
        website_link: row.try_get("website_link")?,
        seeking_venue: row.try_get("seeking_venue")?,
        description: row.try_get("description")?,
    })
}

/// Load artist by id
pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query(&format!("SELECT {} FROM artists WHERE id = ?", ARTIST_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(artist_from_row).transpose()
}

/// All artists (id and name), ordered by name
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<NamedRecord>> {
    let rows = sqlx::query("SELECT id, name FROM artists ORDER BY name, id")
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| {
            Ok(NamedRecord {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
            })
        })
        .collect()
}

pub async fn artist_exists(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
        .bind(id)
        .fetch_one(conn)
        .await?;

    Ok(exists)
}

/// Insert a new artist, returning its generated id
pub async fn create_artist(pool: &SqlitePool, input: &ArtistInput) -> Result<i64> {
    input.validate().map_err(Error::Validation)?;

    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres, facebook_link,
            image_link, website_link, seeking_venue, description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(Json(&input.genres))
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(input.seeking_venue)
    .bind(&input.description)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!("Created artist {} ({})", id, input.name);
    Ok(id)
}

/// Overwrite every mutable field of an existing artist
pub async fn update_artist(pool: &SqlitePool, id: i64, input: &ArtistInput) -> Result<()> {
    let mut tx = pool.begin().await?;

    // Missing record outranks invalid input
    if !artist_exists(&mut tx, id).await? {
        return Err(Error::NotFound(format!("Artist {}", id)));
    }
    input.validate().map_err(Error::Validation)?;

    sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?,
            facebook_link = ?, image_link = ?, website_link = ?,
            seeking_venue = ?, description = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(Json(&input.genres))
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(input.seeking_venue)
    .bind(&input.description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!("Updated artist {} ({})", id, input.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init::init_database_file;
    use tempfile::TempDir;

    fn input(name: &str) -> ArtistInput {
        ArtistInput {
            name: name.into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "326-123-5000".into(),
            genres: vec!["Rock n Roll".into()],
            facebook_link: Some("https://www.facebook.com/GunsNPetals".into()),
            image_link: None,
            website_link: None,
            seeking_venue: true,
            description: Some("Looking for shows in the San Francisco Bay Area!".into()),
        }
    }

    #[tokio::test]
    async fn test_save_and_load_artist() {
        let dir = TempDir::new().unwrap();
        let pool = init_database_file(&dir.path().join("artists.db")).await.unwrap();

        let id = create_artist(&pool, &input("Guns N Petals")).await.unwrap();
        let artist = get_artist(&pool, id).await.unwrap().expect("artist exists");

        assert_eq!(artist.name, "Guns N Petals");
        assert_eq!(artist.genres, vec!["Rock n Roll".to_string()]);
        assert!(artist.seeking_venue);
        assert_eq!(
            artist.facebook_link.as_deref(),
            Some("https://www.facebook.com/GunsNPetals")
        );
    }

    #[tokio::test]
    async fn test_list_artists_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        let pool = init_database_file(&dir.path().join("artists.db")).await.unwrap();

        create_artist(&pool, &input("The Wild Sax Band")).await.unwrap();
        create_artist(&pool, &input("Guns N Petals")).await.unwrap();
        create_artist(&pool, &input("Matt Quevedo")).await.unwrap();

        let names: Vec<String> = list_artists(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
    }

    #[tokio::test]
    async fn test_update_missing_artist_is_not_found() {
        let dir = TempDir::new().unwrap();
        let pool = init_database_file(&dir.path().join("artists.db")).await.unwrap();

        let result = update_artist(&pool, 42, &input("Nobody")).await;
        assert!(matches!(result, Err(Error::NotFound(_))));

        let result = update_artist(&pool, 42, &input("")).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
