//! Database models and the validated inputs used to write them

use crate::choices::{is_known_genre, is_known_state};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

/// Row of the all-shows listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Id and name, used by plain listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedRecord {
    pub id: i64,
    pub name: String,
}

/// Every mutable venue field, as written on create and on edit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub description: Option<String>,
}

impl VenueInput {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        require(&mut errors, "Name", &self.name);
        require(&mut errors, "City", &self.city);
        require(&mut errors, "State", &self.state);
        require(&mut errors, "Address", &self.address);
        check_profile(
            &mut errors,
            &self.state,
            &self.phone,
            &self.genres,
            [&self.facebook_link, &self.image_link, &self.website_link],
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Every mutable artist field, as written on create and on edit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub description: Option<String>,
}

impl ArtistInput {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        require(&mut errors, "Name", &self.name);
        require(&mut errors, "City", &self.city);
        require(&mut errors, "State", &self.state);
        check_profile(
            &mut errors,
            &self.state,
            &self.phone,
            &self.genres,
            [&self.facebook_link, &self.image_link, &self.website_link],
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowInput {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

fn require(errors: &mut Vec<String>, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{} is required", label));
    }
}

/// Checks shared by venues and artists
fn check_profile(
    errors: &mut Vec<String>,
    state: &str,
    phone: &str,
    genres: &[String],
    links: [&Option<String>; 3],
) {
    if !state.trim().is_empty() && !is_known_state(state) {
        errors.push(format!("Unknown state: {}", state));
    }

    if phone.trim().is_empty() {
        errors.push("Phone is required".to_string());
    } else if !is_plausible_phone(phone) {
        errors.push(format!("Invalid phone number: {}", phone));
    }

    for genre in genres {
        if !is_known_genre(genre) {
            errors.push(format!("Unknown genre: {}", genre));
        }
    }

    for link in links.into_iter().flatten() {
        if !(link.starts_with("http://") || link.starts_with("https://")) {
            errors.push(format!("Link must start with http:// or https://: {}", link));
        }
    }
}

fn is_plausible_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    digits >= 7
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'))
}
