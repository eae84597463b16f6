//! Show listing page

use showbill_common::db::ShowListing;
use showbill_common::time::{format_datetime, DateFormat};

use super::{escape, image_tag, layout, Flash};

pub fn show_list_page(shows: &[ShowListing], flash: Option<&Flash>) -> String {
    let items: String = if shows.is_empty() {
        r#"<p class="muted">No shows listed yet.</p>"#.to_string()
    } else {
        let rows: String = shows
            .iter()
            .map(|show| {
                format!(
                    r#"<li class="show">
    {image}
    <a href="/artists/{artist_id}">{artist_name}</a> at
    <a href="/venues/{venue_id}">{venue_name}</a>
    <span class="muted">{when}</span>
</li>"#,
                    image = image_tag(show.artist_image_link.as_deref(), &show.artist_name),
                    artist_id = show.artist_id,
                    artist_name = escape(&show.artist_name),
                    venue_id = show.venue_id,
                    venue_name = escape(&show.venue_name),
                    when = format_datetime(&show.start_time, DateFormat::Medium),
                )
            })
            .collect();
        format!("<ul>{rows}</ul>")
    };

    let body = format!("<h1>Shows</h1>\n{items}");
    layout("Shows", flash, &body)
}
