//! Server-rendered HTML pages
//!
//! Pages are assembled with `format!` around a shared [`layout`]. Every value
//! that came from a user or the database goes through [`escape`] first.

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod shows;
pub mod venues;

use showbill_common::listing::{SearchResults, ShowEntry, ShowPartition};
use showbill_common::time::{format_datetime, DateFormat};

/// Severity of a one-shot message shown above page content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn css_class(self) -> &'static str {
        match self {
            FlashKind::Success => "flash flash-success",
            FlashKind::Error => "flash flash-error",
        }
    }
}

/// Message rendered once, into the response that reports an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub messages: Vec<String>,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            messages: vec![message.into()],
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            messages: vec![message.into()],
        }
    }

    pub fn errors(messages: Vec<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            messages,
        }
    }

    fn render(&self) -> String {
        let items: String = self
            .messages
            .iter()
            .map(|m| format!("<li>{}</li>", escape(m)))
            .collect();
        format!(
            r#"<div class="{}" role="alert"><ul>{}</ul></div>"#,
            self.kind.css_class(),
            items
        )
    }
}

/// HTML-escape text for element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Full document: navigation, optional flash, page body and build footer
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = flash.map(Flash::render).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Showbill</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
            margin: 0;
        }}
        header {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 16px 20px;
        }}
        header a {{ color: #e0e0e0; margin-right: 16px; text-decoration: none; }}
        header form {{ display: inline; }}
        main {{ padding: 20px; }}
        a {{ color: #7fb3ff; }}
        .flash {{ padding: 10px 16px; margin-bottom: 20px; border-radius: 4px; }}
        .flash ul {{ margin: 0; padding-left: 18px; }}
        .flash-success {{ background-color: #1f3d24; border: 1px solid #2f6b3a; }}
        .flash-error {{ background-color: #4a1f1f; border: 1px solid #7a2f2f; }}
        .muted {{ color: #888; }}
        label {{ display: block; margin-top: 10px; }}
        input, select, textarea {{ background: #2a2a2a; color: #e0e0e0; border: 1px solid #3a3a3a; padding: 6px; }}
        footer {{ padding: 20px; color: #666; font-family: 'Courier New', monospace; font-size: 12px; }}
    </style>
</head>
<body>
<header>
    <a href="/"><strong>Showbill</strong></a>
    <a href="/venues">Venues</a>
    <a href="/artists">Artists</a>
    <a href="/shows">Shows</a>
    <a href="/venues/create">Post a venue</a>
    <a href="/artists/create">Post an artist</a>
    <a href="/shows/create">Post a show</a>
</header>
<main>
{flash_html}
{body}
</main>
<footer>v{version} [{git_hash}] {build_timestamp} ({build_profile})</footer>
</body>
</html>
"#,
        title = escape(title),
        flash_html = flash_html,
        body = body,
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("GIT_HASH"),
        build_timestamp = env!("BUILD_TIMESTAMP"),
        build_profile = env!("BUILD_PROFILE"),
    )
}

/// Search box posting to `action`, prefilled with the last term
pub(crate) fn search_box(action: &str, placeholder: &str, term: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
    <input type="search" name="search_term" placeholder="{placeholder}" value="{term}">
    <button type="submit">Search</button>
</form>"#,
        action = action,
        placeholder = escape(placeholder),
        term = escape(term),
    )
}

/// `<img>` tag, or nothing when no image is known
pub(crate) fn image_tag(link: Option<&str>, alt: &str) -> String {
    match link {
        Some(link) => format!(
            r#"<img src="{}" alt="{}" width="120">"#,
            escape(link),
            escape(alt)
        ),
        None => String::new(),
    }
}

/// Outbound link, or nothing when absent
pub(crate) fn external_link(link: Option<&str>, label: &str) -> String {
    match link {
        Some(link) => format!(
            r#"<p><a href="{}" rel="noopener" target="_blank">{}</a></p>"#,
            escape(link),
            escape(label)
        ),
        None => String::new(),
    }
}

/// Result list for a venue or artist search; `base` is `/venues` or `/artists`
pub fn search_results_page(
    heading: &str,
    base: &str,
    term: &str,
    results: &SearchResults,
) -> String {
    let rows: String = results
        .data
        .iter()
        .map(|found| {
            format!(
                r#"<li><a href="{base}/{id}">{name}</a> <span class="muted">{upcoming} upcoming</span></li>"#,
                base = base,
                id = found.id,
                name = escape(&found.name),
                upcoming = found.num_upcoming_shows,
            )
        })
        .collect();

    let body = format!(
        r#"<h1>{heading}</h1>
{search}
<h3>Number of search results for "{term}": {count}</h3>
<ul>{rows}</ul>"#,
        heading = escape(heading),
        search = search_box(&format!("{base}/search"), heading, term),
        term = escape(term),
        count = results.count,
        rows = rows,
    );
    layout(heading, None, &body)
}

/// Past and upcoming show blocks for a detail page; `base` is where the
/// counterpart records live
pub(crate) fn show_sections(partition: &ShowPartition, base: &str) -> String {
    format!(
        "{}\n{}",
        show_section(
            &format!("{} Upcoming Shows", partition.upcoming_shows_count),
            &partition.upcoming_shows,
            base
        ),
        show_section(
            &format!("{} Past Shows", partition.past_shows_count),
            &partition.past_shows,
            base
        ),
    )
}

fn show_section(heading: &str, shows: &[ShowEntry], base: &str) -> String {
    let rows: String = shows
        .iter()
        .map(|show| {
            format!(
                r#"<li>{image}<a href="{base}/{id}">{name}</a> <span class="muted">{when}</span></li>"#,
                image = image_tag(show.counterpart_image_link.as_deref(), &show.counterpart_name),
                base = base,
                id = show.counterpart_id,
                name = escape(&show.counterpart_name),
                when = format_datetime(&show.starts_at, DateFormat::Medium),
            )
        })
        .collect();
    format!("<section>\n<h2>{}</h2>\n<ul>{}</ul>\n</section>", escape(heading), rows)
}

/// Genres as a comma-separated line
pub(crate) fn genre_line(genres: &[String]) -> String {
    if genres.is_empty() {
        return String::new();
    }
    format!(
        r#"<p class="genres">{}</p>"#,
        escape(&genres.join(", "))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Rock" & 'Roll'</b>"#),
            "&lt;b&gt;&quot;Rock&quot; &amp; &#39;Roll&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Park Square"), "Park Square");
    }

    #[test]
    fn test_layout_renders_flash_escaped() {
        let flash = Flash::success("Venue <Hop> was successfully listed!");
        let page = layout("Home", Some(&flash), "<p>body</p>");

        assert!(page.contains("flash-success"));
        assert!(page.contains("Venue &lt;Hop&gt; was successfully listed!"));
        assert!(page.contains("<p>body</p>"));
        assert!(page.contains("<title>Home | Showbill</title>"));
    }

    #[test]
    fn test_layout_without_flash() {
        let page = layout("Venues", None, "");
        assert!(!page.contains("role=\"alert\""));
    }
}
