//! Derived listings: name search, past/upcoming show partitioning and the
//! grouped venue directory.
//!
//! "Upcoming" everywhere means `start_time >= now`; "past" means
//! `start_time < now`. A show starting exactly at `now` is upcoming.

pub mod areas;
pub mod partition;
pub mod search;

pub use areas::{group_by_area, venue_areas, Area, VenueSummary};
pub use partition::{artist_shows, partition_shows, venue_shows, ShowEntry, ShowPartition};
pub use search::{search, search_artists, search_venues, EntityKind, SearchMatch, SearchResults};

use chrono::{DateTime, Utc};

/// Whether a show starting at `start_time` is upcoming at `now`
pub fn is_upcoming(start_time: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    start_time >= now
}
