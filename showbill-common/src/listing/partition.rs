//! Past / upcoming show partitioning for a venue or an artist

use super::is_upcoming;
use crate::time::format_show_time;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Row, SqlitePool};

/// One show as seen from its venue (counterpart = artist) or from its
/// artist (counterpart = venue)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowEntry {
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub starts_at: DateTime<Utc>,
    /// `starts_at` rendered as `%Y-%m-%d %H:%M:%S`
    pub start_time: String,
}

impl ShowEntry {
    pub fn new(
        counterpart_id: i64,
        counterpart_name: String,
        counterpart_image_link: Option<String>,
        starts_at: DateTime<Utc>,
    ) -> Self {
        Self {
            counterpart_id,
            counterpart_name,
            counterpart_image_link,
            start_time: format_show_time(&starts_at),
            starts_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShowPartition {
    pub past_shows: Vec<ShowEntry>,
    pub upcoming_shows: Vec<ShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Split shows around `now`, keeping their relative order
pub fn partition_shows(shows: Vec<ShowEntry>, now: DateTime<Utc>) -> ShowPartition {
    let (upcoming_shows, past_shows): (Vec<_>, Vec<_>) = shows
        .into_iter()
        .partition(|show| is_upcoming(&show.starts_at, &now));

    ShowPartition {
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

/// Shows at a venue, with the performing artist attached
pub async fn venue_shows(pool: &SqlitePool, venue_id: i64, now: DateTime<Utc>) -> Result<ShowPartition> {
    let rows = sqlx::query(
        r#"
        SELECT a.id AS counterpart_id, a.name AS counterpart_name,
               a.image_link AS counterpart_image_link, s.start_time
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    let shows = rows
        .iter()
        .map(entry_from_row)
        .collect::<Result<Vec<_>>>()?;
    Ok(partition_shows(shows, now))
}

/// Shows by an artist, with the hosting venue attached
pub async fn artist_shows(pool: &SqlitePool, artist_id: i64, now: DateTime<Utc>) -> Result<ShowPartition> {
    let rows = sqlx::query(
        r#"
        SELECT v.id AS counterpart_id, v.name AS counterpart_name,
               v.image_link AS counterpart_image_link, s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    let shows = rows
        .iter()
        .map(entry_from_row)
        .collect::<Result<Vec<_>>>()?;
    Ok(partition_shows(shows, now))
}

fn entry_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<ShowEntry> {
    Ok(ShowEntry::new(
        row.try_get("counterpart_id")?,
        row.try_get("counterpart_name")?,
        row.try_get("counterpart_image_link")?,
        row.try_get("start_time")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn entry(id: i64, starts_at: DateTime<Utc>) -> ShowEntry {
        ShowEntry::new(id, format!("Artist {}", id), None, starts_at)
    }

    #[test]
    fn test_partition_splits_around_now() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap();
        let shows = vec![
            entry(1, now - Duration::days(30)),
            entry(2, now - Duration::minutes(1)),
            entry(3, now + Duration::hours(1)),
            entry(4, now + Duration::days(10)),
            entry(5, now + Duration::days(11)),
        ];

        let partition = partition_shows(shows, now);

        assert_eq!(partition.past_shows_count, 2);
        assert_eq!(partition.upcoming_shows_count, 3);
        let past: Vec<i64> = partition.past_shows.iter().map(|s| s.counterpart_id).collect();
        let upcoming: Vec<i64> = partition.upcoming_shows.iter().map(|s| s.counterpart_id).collect();
        assert_eq!(past, vec![1, 2]);
        assert_eq!(upcoming, vec![3, 4, 5]);
    }

    #[test]
    fn test_partition_counts_cover_every_show() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap();
        let shows: Vec<ShowEntry> = (-5..5).map(|h| entry(h, now + Duration::hours(h))).collect();
        let total = shows.len();

        let partition = partition_shows(shows, now);

        assert_eq!(partition.past_shows_count + partition.upcoming_shows_count, total);
        assert_eq!(partition.past_shows_count, partition.past_shows.len());
        assert_eq!(partition.upcoming_shows_count, partition.upcoming_shows.len());
    }

    #[test]
    fn test_show_at_exactly_now_is_upcoming() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 20, 0, 0).unwrap();
        let partition = partition_shows(vec![entry(1, now)], now);
        assert_eq!(partition.past_shows_count, 0);
        assert_eq!(partition.upcoming_shows_count, 1);
    }

    #[test]
    fn test_entry_formats_start_time() {
        let at = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        assert_eq!(entry(1, at).start_time, "2035-04-01 20:00:00");
    }

    #[test]
    fn test_empty_partition() {
        let partition = partition_shows(Vec::new(), Utc::now());
        assert_eq!(partition, ShowPartition::default());
    }
}
