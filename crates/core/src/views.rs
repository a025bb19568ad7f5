//! Page views. Failures are logged and leave the view unrendered.

use crate::{
    api::CatalogApi,
    format::{format_movie_detail, format_movie_list},
    location::{MISSING_ID, movie_id_from_location},
    render::{render_movie_detail, render_movie_grid},
    types::{MovieDetail, MovieSummary},
};

#[derive(Debug, Clone, PartialEq)]
pub struct MovieListView {
    pub movies: Vec<MovieSummary>,
}

impl MovieListView {
    pub fn html(&self) -> String {
        render_movie_grid(&self.movies)
    }

    pub fn text(&self) -> String {
        format_movie_list(&self.movies)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailView {
    pub id: String,
    pub movie: MovieDetail,
}

impl MovieDetailView {
    pub fn html(&self) -> String {
        render_movie_detail(&self.movie)
    }

    pub fn text(&self) -> String {
        format_movie_detail(&self.movie)
    }
}

/// Fetch the catalog for the grid; `None` leaves the grid unrendered
pub async fn load_movie_list(api: &dyn CatalogApi) -> Option<MovieListView> {
    match api.list_movies().await {
        Ok(movies) => {
            tracing::info!(count = movies.len(), "movie list loaded");
            Some(MovieListView { movies })
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load movie list");
            None
        }
    }
}

/// Fetch the movie named by the location's `id` parameter
pub async fn load_movie_detail(api: &dyn CatalogApi, location: &str) -> Option<MovieDetailView> {
    let id = movie_id_from_location(location).unwrap_or_else(|| {
        tracing::warn!(%location, "location has no id parameter");
        MISSING_ID.to_string()
    });

    match api.get_movie(&id).await {
        Ok(movie) => {
            tracing::info!(%id, title = %movie.title, "movie detail loaded");
            Some(MovieDetailView { id, movie })
        }
        Err(e) => {
            tracing::error!(%id, error = %e, "failed to load movie detail");
            None
        }
    }
}
