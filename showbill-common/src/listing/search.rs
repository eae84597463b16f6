//! Case-insensitive partial-name search over venues and artists

use super::is_upcoming;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Row, SqlitePool};

/// Which record table a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Venue,
    Artist,
}

impl EntityKind {
    /// One row per (record, show); records without shows have a NULL start
    /// time. Ordered so rows of the same record are adjacent.
    ///
    /// Name filtering happens in [`name_matches`]: SQLite's `lower()` only
    /// folds ASCII letters.
    fn search_sql(self) -> &'static str {
        match self {
            EntityKind::Venue => {
                r#"
                SELECT r.id, r.name, s.start_time
                FROM venues r
                LEFT JOIN shows s ON s.venue_id = r.id
                ORDER BY r.name, r.id
                "#
            }
            EntityKind::Artist => {
                r#"
                SELECT r.id, r.name, s.start_time
                FROM artists r
                LEFT JOIN shows s ON s.artist_id = r.id
                ORDER BY r.name, r.id
                "#
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchMatch>,
}

/// Whether `name` contains the already-lowercased `needle`, ignoring case
///
/// Matching is literal, so `%` and `_` are ordinary characters. An empty
/// needle matches every name.
pub fn name_matches(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}

/// Records whose name contains `term`, ignoring case (Unicode-aware)
///
/// The term is matched literally (no wildcards). An empty term matches every
/// record.
pub async fn search(
    pool: &SqlitePool,
    kind: EntityKind,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults> {
    let rows = sqlx::query(kind.search_sql()).fetch_all(pool).await?;
    let needle = term.to_lowercase();

    let mut data: Vec<SearchMatch> = Vec::new();
    for row in &rows {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        if !name_matches(&name, &needle) {
            continue;
        }
        let start_time: Option<DateTime<Utc>> = row.try_get("start_time")?;
        let upcoming = start_time.map_or(false, |t| is_upcoming(&t, &now));

        match data.last_mut() {
            Some(last) if last.id == id => {
                if upcoming {
                    last.num_upcoming_shows += 1;
                }
            }
            _ => data.push(SearchMatch {
                id,
                name,
                num_upcoming_shows: usize::from(upcoming),
            }),
        }
    }

    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

pub async fn search_venues(pool: &SqlitePool, term: &str, now: DateTime<Utc>) -> Result<SearchResults> {
    search(pool, EntityKind::Venue, term, now).await
}

pub async fn search_artists(pool: &SqlitePool, term: &str, now: DateTime<Utc>) -> Result<SearchResults> {
    search(pool, EntityKind::Artist, term, now).await
}
