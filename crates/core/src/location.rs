use reqwest::Url;

/// Page the list cards link to
pub const DETAIL_PAGE: &str = "movie.html";

/// Path segment requested when the location carries no `id` parameter
pub const MISSING_ID: &str = "null";

const PAGE_ORIGIN: &str = "http://page.local/";

/// Link target of a movie card, with the id form-encoded
pub fn detail_href(id: &str) -> String {
    let query = Url::parse(PAGE_ORIGIN)
        .ok()
        .and_then(|mut url| {
            url.query_pairs_mut().append_pair("id", id);
            url.query().map(str::to_string)
        })
        .unwrap_or_else(|| format!("id={}", id));

    format!("{}?{}", DETAIL_PAGE, query)
}

/// Extract the `id` query parameter from a page location.
///
/// Accepts a full URL, a relative page (`movie.html?id=42`), a bare query
/// (`?id=42`) or a query without the leading `?` (`id=42`).
pub fn movie_id_from_location(location: &str) -> Option<String> {
    let query = match location.split_once('?') {
        Some((_, query)) => query,
        None if location.contains('=') => location,
        None => return None,
    };
    let query = query.split('#').next().unwrap_or_default();

    let mut url = Url::parse(PAGE_ORIGIN).ok()?;
    url.set_query(Some(query));

    url.query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_id_from_relative_page() {
        assert_eq!(
            movie_id_from_location("movie.html?id=42").as_deref(),
            Some("42")
        );
    }

    #[test]
    fn reads_id_from_full_url_with_fragment() {
        assert_eq!(
            movie_id_from_location("http://localhost:5500/movie.html?x=1&id=ab%20c#player")
                .as_deref(),
            Some("ab c")
        );
    }

    #[test]
    fn reads_bare_queries() {
        assert_eq!(movie_id_from_location("?id=7").as_deref(), Some("7"));
        assert_eq!(movie_id_from_location("id=7").as_deref(), Some("7"));
    }

    #[test]
    fn missing_id_is_none() {
        assert_eq!(movie_id_from_location("movie.html"), None);
        assert_eq!(movie_id_from_location("movie.html?title=x"), None);
    }

    #[test]
    fn href_points_at_detail_page() {
        assert_eq!(detail_href("9f1c"), "movie.html?id=9f1c");
    }

    #[test]
    fn href_encodes_reserved_characters() {
        let href = detail_href("a#b c&d=e");
        assert!(!href.contains('#'));
        assert_eq!(movie_id_from_location(&href).as_deref(), Some("a#b c&d=e"));
    }
}
