//! Landing page

use super::{layout, search_box, Flash};

pub fn home_page(flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<h1>Showbill</h1>
<p>Find venues and artists, and book the next show.</p>
<h2>Venues</h2>
{venue_search}
<h2>Artists</h2>
{artist_search}"#,
        venue_search = search_box("/venues/search", "Find a venue", ""),
        artist_search = search_box("/artists/search", "Find an artist", ""),
    );
    layout("Home", flash, &body)
}
