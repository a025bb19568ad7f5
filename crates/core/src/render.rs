//! HTML fragments for the `movies-grid` and `movie-detail` containers.

use crate::{
    location::detail_href,
    types::{MovieDetail, MovieSummary},
};

pub const GRID_CONTAINER_ID: &str = "movies-grid";
pub const DETAIL_CONTAINER_ID: &str = "movie-detail";

/// Width of the inline player, in CSS pixels
pub const PLAYER_WIDTH: u32 = 800;

/// Escape text for use in element content and double-quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Year as shown on the page; a missing year renders empty
pub fn year_label(year: Option<i32>) -> String {
    year.map(|year| year.to_string()).unwrap_or_default()
}

pub fn render_movie_card(movie: &MovieSummary) -> String {
    let title = escape_html(&movie.title);
    let img = match &movie.thumb {
        Some(thumb) => format!("<img src=\"{}\" alt=\"{}\">", escape_html(thumb), title),
        None => format!("<img alt=\"{}\">", title),
    };
    format!(
        concat!(
            "<a class=\"movie-card\" href=\"{href}\">\n",
            "  {img}\n",
            "  <div class=\"info\">\n",
            "    <h3>{title}</h3>\n",
            "    <p>{year}</p>\n",
            "  </div>\n",
            "</a>\n"
        ),
        href = escape_html(&detail_href(&movie.id)),
        img = img,
        title = title,
        year = year_label(movie.year),
    )
}

/// Inner HTML of the grid container: one card per movie, in API order
pub fn render_movie_grid(movies: &[MovieSummary]) -> String {
    movies.iter().map(render_movie_card).collect()
}

/// Inner HTML of the detail container: title, player, year
pub fn render_movie_detail(movie: &MovieDetail) -> String {
    format!(
        concat!(
            "<h2>{title}</h2>\n",
            "<video src=\"{video}\" controls width=\"{width}\"></video>\n",
            "<p>Ano: {year}</p>\n"
        ),
        title = escape_html(&movie.title),
        video = escape_html(&movie.video),
        width = PLAYER_WIDTH,
        year = year_label(movie.year),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str, year: i32) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: title.to_string(),
            year: Some(year),
            thumb: Some(format!("https://blobs.example/image/{id}.png")),
        }
    }

    #[test]
    fn grid_has_one_card_per_movie() {
        let movies = vec![
            summary("1", "Metropolis", 1927),
            summary("2", "Stalker", 1979),
            summary("3", "Central do Brasil", 1998),
        ];
        let html = render_movie_grid(&movies);

        assert_eq!(html.matches("class=\"movie-card\"").count(), 3);
        for movie in &movies {
            assert!(html.contains(&format!("href=\"movie.html?id={}\"", movie.id)));
            assert!(html.contains(&format!("<h3>{}</h3>", movie.title)));
            assert!(html.contains(&format!("<p>{}</p>", year_label(movie.year))));
            assert!(html.contains(&format!("src=\"{}\"", movie.thumb.as_deref().unwrap())));
        }
    }

    #[test]
    fn empty_grid_is_empty() {
        assert_eq!(render_movie_grid(&[]), "");
    }

    #[test]
    fn detail_binds_player_to_video() {
        let movie = MovieDetail {
            id: Some("7".to_string()),
            title: "Cidade de Deus".to_string(),
            year: Some(2002),
            video: "https://blobs.example/video/cdd.mp4".to_string(),
            thumb: None,
        };
        let html = render_movie_detail(&movie);

        assert!(html.contains("<h2>Cidade de Deus</h2>"));
        assert!(html.contains(
            "<video src=\"https://blobs.example/video/cdd.mp4\" controls width=\"800\"></video>"
        ));
        assert!(html.contains("<p>Ano: 2002</p>"));
    }

    #[test]
    fn card_without_year_or_thumb_still_renders() {
        let movie = MovieSummary {
            id: "u1".to_string(),
            title: "Untitled".to_string(),
            year: None,
            thumb: None,
        };
        let html = render_movie_grid(&[summary("1", "Metropolis", 1927), movie]);

        assert_eq!(html.matches("class=\"movie-card\"").count(), 2);
        assert!(html.contains("<img alt=\"Untitled\">"));
        assert!(html.contains("<h3>Untitled</h3>\n    <p></p>"));
    }

    #[test]
    fn detail_without_year_renders_empty_year() {
        let movie = MovieDetail {
            id: None,
            title: "Untitled".to_string(),
            year: None,
            video: "https://blobs.example/video/u.mp4".to_string(),
            thumb: None,
        };
        assert!(render_movie_detail(&movie).contains("<p>Ano: </p>"));
    }

    #[test]
    fn titles_are_escaped() {
        let html = render_movie_card(&summary("x", "<script>\"Tom & Jerry\"</script>", 1940));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;&quot;Tom &amp; Jerry&quot;&lt;/script&gt;"));
    }
}
