use crate::types::{MovieDetail, MovieSummary};

/// Format the catalog as `[id] Title (year)` lines; the year is dropped when unknown
pub fn format_movie_list(movies: &[MovieSummary]) -> String {
    movies
        .iter()
        .map(|movie| match movie.year {
            Some(year) => format!("[{}] {} ({})", movie.id, movie.title, year),
            None => format!("[{}] {}", movie.id, movie.title),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_movie_detail(movie: &MovieDetail) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", movie.title));
    if let Some(year) = movie.year {
        output.push_str(&format!("**Year:** {}\n", year));
    }
    output.push_str(&format!("**Video:** {}\n", movie.video));
    if let Some(thumb) = &movie.thumb {
        output.push_str(&format!("**Thumbnail:** {}\n", thumb));
    }

    output
}
