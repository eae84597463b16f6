//! Demo records for a fresh installation

use crate::db::artists::create_artist;
use crate::db::models::{ArtistInput, ShowInput, VenueInput};
use crate::db::shows::create_show;
use crate::db::venues::create_venue;
use crate::Result;
use chrono::{TimeZone, Utc};
use sqlx::SqlitePool;
use tracing::info;

/// Insert the demo venues, artists and shows
///
/// Does nothing when any venue already exists. Returns whether data was
/// inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool> {
    let venues: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
        .fetch_one(pool)
        .await?;
    if venues > 0 {
        info!("Skipping demo data: {} venue(s) already present", venues);
        return Ok(false);
    }

    let musical_hop = create_venue(
        pool,
        &VenueInput {
            name: "The Musical Hop".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            phone: "123-123-1234".into(),
            genres: strings(&["Jazz", "Reggae", "Classical", "Folk"]),
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".into()),
            image_link: Some("https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400".into()),
            website_link: Some("https://www.themusicalhop.com".into()),
            seeking_talent: true,
            description: Some(
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .into(),
            ),
        },
    )
    .await?;

    let dueling_pianos = create_venue(
        pool,
        &VenueInput {
            name: "The Dueling Pianos Bar".into(),
            city: "New York".into(),
            state: "NY".into(),
            address: "335 Delancey Street".into(),
            phone: "914-003-1132".into(),
            genres: strings(&["Classical", "R&B", "Hip-Hop"]),
            facebook_link: Some("https://www.facebook.com/theduelingpianos".into()),
            image_link: Some("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=750".into()),
            website_link: Some("https://www.theduelingpianos.com".into()),
            seeking_talent: false,
            description: None,
        },
    )
    .await?;

    let park_square = create_venue(
        pool,
        &VenueInput {
            name: "Park Square Live Music & Coffee".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "34 Whiskey Moore Ave".into(),
            phone: "415-000-1234".into(),
            genres: strings(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            facebook_link: Some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee".into()),
            image_link: Some("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=747".into()),
            website_link: Some("https://www.parksquarelivemusicandcoffee.com".into()),
            seeking_talent: false,
            description: None,
        },
    )
    .await?;

    let guns_n_petals = create_artist(
        pool,
        &ArtistInput {
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "326-123-5000".into(),
            genres: strings(&["Rock n Roll"]),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".into()),
            image_link: Some("https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300".into()),
            website_link: Some("https://www.gunsnpetalsband.com".into()),
            seeking_venue: true,
            description: Some("Looking for shows to perform at in the San Francisco Bay Area!".into()),
        },
    )
    .await?;

    let matt_quevedo = create_artist(
        pool,
        &ArtistInput {
            name: "Matt Quevedo".into(),
            city: "New York".into(),
            state: "NY".into(),
            phone: "300-400-5000".into(),
            genres: strings(&["Jazz"]),
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".into()),
            image_link: Some("https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334".into()),
            website_link: None,
            seeking_venue: false,
            description: None,
        },
    )
    .await?;

    let wild_sax_band = create_artist(
        pool,
        &ArtistInput {
            name: "The Wild Sax Band".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "432-325-5432".into(),
            genres: strings(&["Jazz", "Classical"]),
            facebook_link: None,
            image_link: Some("https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794".into()),
            website_link: None,
            seeking_venue: false,
            description: None,
        },
    )
    .await?;

    let shows = [
        (musical_hop, guns_n_petals, (2019, 5, 21, 21, 30)),
        (park_square, matt_quevedo, (2019, 6, 15, 23, 0)),
        (park_square, wild_sax_band, (2035, 4, 1, 20, 0)),
        (park_square, wild_sax_band, (2035, 4, 8, 20, 0)),
        (park_square, wild_sax_band, (2035, 4, 15, 20, 0)),
        (dueling_pianos, matt_quevedo, (2035, 5, 2, 19, 0)),
    ];
    for (venue_id, artist_id, (y, mo, d, h, mi)) in shows {
        let start_time = Utc
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .single()
            .ok_or_else(|| crate::Error::invalid("Invalid demo show time"))?;
        create_show(pool, &ShowInput { venue_id, artist_id, start_time }).await?;
    }

    info!("Inserted demo data (3 venues, 3 artists, {} shows)", shows.len());
    Ok(true)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
