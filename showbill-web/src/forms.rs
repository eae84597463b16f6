//! Typed form bodies and their explicit mapping onto record inputs
//!
//! Every field defaults to empty so that a sparse submission still reaches
//! validation (and gets a readable message) instead of failing extraction.

use serde::Deserialize;
use showbill_common::db::models::{Artist, ArtistInput, ShowInput, Venue, VenueInput};
use showbill_common::time::{format_show_time, parse_start_time};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub image_link: String,
    pub website_link: String,
    /// Checkbox: present when ticked
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn to_input(&self) -> VenueInput {
        VenueInput {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            genres: clean_genres(&self.genres),
            facebook_link: optional(&self.facebook_link),
            image_link: optional(&self.image_link),
            website_link: optional(&self.website_link),
            seeking_talent: is_checked(self.seeking_talent.as_deref()),
            description: optional(&self.seeking_description),
        }
    }
}

/// Prefill for the edit form
impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genres.clone(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub image_link: String,
    pub website_link: String,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn to_input(&self) -> ArtistInput {
        ArtistInput {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: self.phone.trim().to_string(),
            genres: clean_genres(&self.genres),
            facebook_link: optional(&self.facebook_link),
            image_link: optional(&self.image_link),
            website_link: optional(&self.website_link),
            seeking_venue: is_checked(self.seeking_venue.as_deref()),
            description: optional(&self.seeking_description),
        }
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: artist.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Blank form with the start time preset to `now`
    pub fn starting_at(now: &chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            start_time: format_show_time(now),
            ..Default::default()
        }
    }

    pub fn to_input(&self) -> Result<ShowInput, Vec<String>> {
        let mut errors = Vec::new();

        let artist_id = parse_id(&self.artist_id, "Artist ID", &mut errors);
        let venue_id = parse_id(&self.venue_id, "Venue ID", &mut errors);
        let start_time = if self.start_time.trim().is_empty() {
            errors.push("Start time is required".to_string());
            None
        } else {
            let parsed = parse_start_time(&self.start_time);
            if parsed.is_none() {
                errors.push(format!("Invalid start time: {}", self.start_time.trim()));
            }
            parsed
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(ShowInput {
                    venue_id,
                    artist_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_id(value: &str, label: &str, errors: &mut Vec<String>) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(format!("{} is required", label));
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.push(format!("{} must be a positive number", label));
            None
        }
    }
}

/// Trimmed value, or `None` when blank
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn is_checked(value: Option<&str>) -> bool {
    match value {
        Some(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "" | "n" | "no" | "false" | "off" | "0"),
        None => false,
    }
}

/// Trimmed, non-empty, first occurrence wins
fn clean_genres(genres: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for genre in genres {
        let genre = genre.trim();
        if !genre.is_empty() && !cleaned.iter().any(|g| g == genre) {
            cleaned.push(genre.to_string());
        }
    }
    cleaned
}
