//! Create / edit form pages

use showbill_common::choices::{GENRES, STATES};

use super::{escape, layout, Flash};
use crate::forms::{ArtistForm, ShowForm, VenueForm};

fn text_field(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}">"#,
        name = name,
        label = label,
        value = escape(value),
    )
}

fn state_select(selected: &str) -> String {
    let options: String = STATES
        .iter()
        .map(|code| {
            let mark = if *code == selected { " selected" } else { "" };
            format!(r#"<option value="{code}"{mark}>{code}</option>"#)
        })
        .collect();
    format!(
        r#"<label for="state">State</label>
<select id="state" name="state"><option value=""></option>{options}</select>"#
    )
}

fn genre_select(selected: &[String]) -> String {
    let options: String = GENRES
        .iter()
        .map(|genre| {
            let mark = if selected.iter().any(|g| g == genre) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{value}"{mark}>{value}</option>"#,
                value = escape(genre)
            )
        })
        .collect();
    format!(
        r#"<label for="genres">Genres</label>
<select id="genres" name="genres" multiple size="8">{options}</select>"#
    )
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    let mark = if checked { " checked" } else { "" };
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{mark}> {label}</label>"#
    )
}

fn description_field(value: &str) -> String {
    format!(
        r#"<label for="seeking_description">Seeking description</label>
<textarea id="seeking_description" name="seeking_description" rows="4" cols="60">{}</textarea>"#,
        escape(value)
    )
}

/// Venue create/edit page; `action` is the POST target
pub fn venue_form_page(title: &str, action: &str, form: &VenueForm, flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
{name}
{city}
{state}
{address}
{phone}
{genres}
{facebook}
{image}
{website}
{seeking}
{description}
<p><button type="submit">Save venue</button></p>
</form>"#,
        title = escape(title),
        action = escape(action),
        name = text_field("name", "Name", &form.name),
        city = text_field("city", "City", &form.city),
        state = state_select(&form.state),
        address = text_field("address", "Address", &form.address),
        phone = text_field("phone", "Phone", &form.phone),
        genres = genre_select(&form.genres),
        facebook = text_field("facebook_link", "Facebook link", &form.facebook_link),
        image = text_field("image_link", "Image link", &form.image_link),
        website = text_field("website_link", "Website link", &form.website_link),
        seeking = checkbox("seeking_talent", "Looking for talent", form.seeking_talent.is_some()),
        description = description_field(&form.seeking_description),
    );
    layout(title, flash, &body)
}

pub fn artist_form_page(title: &str, action: &str, form: &ArtistForm, flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
{name}
{city}
{state}
{phone}
{genres}
{facebook}
{image}
{website}
{seeking}
{description}
<p><button type="submit">Save artist</button></p>
</form>"#,
        title = escape(title),
        action = escape(action),
        name = text_field("name", "Name", &form.name),
        city = text_field("city", "City", &form.city),
        state = state_select(&form.state),
        phone = text_field("phone", "Phone", &form.phone),
        genres = genre_select(&form.genres),
        facebook = text_field("facebook_link", "Facebook link", &form.facebook_link),
        image = text_field("image_link", "Image link", &form.image_link),
        website = text_field("website_link", "Website link", &form.website_link),
        seeking = checkbox("seeking_venue", "Looking for venues", form.seeking_venue.is_some()),
        description = description_field(&form.seeking_description),
    );
    layout(title, flash, &body)
}

pub fn show_form_page(form: &ShowForm, flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<h1>List a new show</h1>
<form method="post" action="/shows/create">
{artist}
{venue}
<label for="start_time">Start time</label>
<input type="text" id="start_time" name="start_time" value="{start}" placeholder="YYYY-MM-DD HH:MM:SS">
<p><button type="submit">Create show</button></p>
</form>"#,
        artist = text_field("artist_id", "Artist ID", &form.artist_id),
        venue = text_field("venue_id", "Venue ID", &form.venue_id),
        start = escape(&form.start_time),
    );
    layout("New show", flash, &body)
}
