//! Venue directory grouped by (city, state)

use super::is_upcoming;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Row, SqlitePool};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group venues sharing the exact same (city, state) pair
///
/// Areas are ordered by city then state; venues inside an area by name then
/// id. The result does not depend on input order.
pub fn group_by_area(venues: Vec<(String, String, VenueSummary)>) -> Vec<Area> {
    let mut grouped: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for (city, state, venue) in venues {
        grouped.entry((city, state)).or_default().push(venue);
    }

    grouped
        .into_iter()
        .map(|((city, state), mut venues)| {
            venues.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            Area { city, state, venues }
        })
        .collect()
}

/// Every venue, grouped by area, with upcoming show counts
pub async fn venue_areas(pool: &SqlitePool, now: DateTime<Utc>) -> Result<Vec<Area>> {
    let rows = sqlx::query(
        r#"
        SELECT v.id, v.name, v.city, v.state, s.start_time
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id
        ORDER BY v.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut venues: Vec<(String, String, VenueSummary)> = Vec::new();
    for row in &rows {
        let id: i64 = row.try_get("id")?;
        let start_time: Option<DateTime<Utc>> = row.try_get("start_time")?;
        let upcoming = start_time.map_or(false, |t| is_upcoming(&t, &now));

        match venues.last_mut() {
            Some((_, _, last)) if last.id == id => {
                if upcoming {
                    last.num_upcoming_shows += 1;
                }
            }
            _ => venues.push((
                row.try_get("city")?,
                row.try_get("state")?,
                VenueSummary {
                    id,
                    name: row.try_get("name")?,
                    num_upcoming_shows: usize::from(upcoming),
                },
            )),
        }
    }

    Ok(group_by_area(venues))
}
