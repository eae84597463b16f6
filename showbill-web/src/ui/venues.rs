//! Venue directory and venue detail pages

use showbill_common::db::Venue;
use showbill_common::listing::{Area, ShowPartition};

use super::{escape, external_link, genre_line, image_tag, layout, search_box, show_sections, Flash};

/// Venues grouped by area
pub fn venue_list_page(areas: &[Area], flash: Option<&Flash>) -> String {
    let sections: String = if areas.is_empty() {
        r#"<p class="muted">No venues listed yet.</p>"#.to_string()
    } else {
        areas
            .iter()
            .map(|area| {
                let venues: String = area
                    .venues
                    .iter()
                    .map(|venue| {
                        format!(
                            r#"<li><a href="/venues/{id}">{name}</a> <span class="muted">{upcoming} upcoming</span></li>"#,
                            id = venue.id,
                            name = escape(&venue.name),
                            upcoming = venue.num_upcoming_shows,
                        )
                    })
                    .collect();
                format!(
                    "<section class=\"area\">\n<h2>{}, {}</h2>\n<ul>{}</ul>\n</section>\n",
                    escape(&area.city),
                    escape(&area.state),
                    venues
                )
            })
            .collect()
    };

    let body = format!(
        "<h1>Venues</h1>\n{}\n{}",
        search_box("/venues/search", "Find a venue", ""),
        sections
    );
    layout("Venues", flash, &body)
}

pub fn venue_detail_page(venue: &Venue, shows: &ShowPartition, flash: Option<&Flash>) -> String {
    let seeking = if venue.seeking_talent {
        format!(
            r#"<p class="seeking">Currently seeking talent</p><p>{}</p>"#,
            escape(venue.description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p class="muted">Not currently seeking talent</p>"#.to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p class="muted">ID: {id}</p>
{genres}
{image}
<p>{address}<br>{city}, {state}</p>
<p>{phone}</p>
{website}
{facebook}
{seeking}
<p><a href="/venues/{id}/edit">Edit venue</a></p>
{shows}"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_line(&venue.genres),
        image = image_tag(venue.image_link.as_deref(), &venue.name),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(&venue.phone),
        website = external_link(venue.website_link.as_deref(), "Website"),
        facebook = external_link(venue.facebook_link.as_deref(), "Facebook"),
        seeking = seeking,
        shows = show_sections(shows, "/artists"),
    );
    layout(&venue.name, flash, &body)
}
