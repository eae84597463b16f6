//! Artist directory and artist detail pages

use showbill_common::db::{Artist, NamedRecord};
use showbill_common::listing::ShowPartition;

use super::{escape, external_link, genre_line, image_tag, layout, search_box, show_sections, Flash};

pub fn artist_list_page(artists: &[NamedRecord], flash: Option<&Flash>) -> String {
    let rows: String = artists
        .iter()
        .map(|artist| {
            format!(
                r#"<li><a href="/artists/{}">{}</a></li>"#,
                artist.id,
                escape(&artist.name)
            )
        })
        .collect();

    let listing = if rows.is_empty() {
        r#"<p class="muted">No artists listed yet.</p>"#.to_string()
    } else {
        format!("<ul>{rows}</ul>")
    };

    let body = format!(
        "<h1>Artists</h1>\n{}\n{}",
        search_box("/artists/search", "Find an artist", ""),
        listing
    );
    layout("Artists", flash, &body)
}

pub fn artist_detail_page(artist: &Artist, shows: &ShowPartition, flash: Option<&Flash>) -> String {
    let seeking = if artist.seeking_venue {
        format!(
            r#"<p class="seeking">Currently seeking performance venues</p><p>{}</p>"#,
            escape(artist.description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p class="muted">Not currently seeking performance venues</p>"#.to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p class="muted">ID: {id}</p>
{genres}
{image}
<p>{city}, {state}</p>
<p>{phone}</p>
{website}
{facebook}
{seeking}
<p><a href="/artists/{id}/edit">Edit artist</a></p>
{shows}"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_line(&artist.genres),
        image = image_tag(artist.image_link.as_deref(), &artist.name),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = external_link(artist.website_link.as_deref(), "Website"),
        facebook = external_link(artist.facebook_link.as_deref(), "Facebook"),
        seeking = seeking,
        shows = show_sections(shows, "/venues"),
    );
    layout(&artist.name, flash, &body)
}
