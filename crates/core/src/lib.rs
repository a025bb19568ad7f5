//! Cineteca Core Library
//!
//! Typed client for the movie catalog API, the list and detail views, and
//! the upload form handler.

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod location;
pub mod render;
pub mod types;
pub mod upload;
pub mod views;

// Re-export commonly used items at crate root
pub use api::{CatalogApi, HttpCatalog};
pub use config::{ClientConfig, DEFAULT_API_BASE, get_config_path};
pub use error::{CatalogError, Result};
pub use format::{format_movie_detail, format_movie_list};
pub use location::{detail_href, movie_id_from_location};
pub use render::{render_movie_detail, render_movie_grid};
pub use types::{FileKind, MovieDetail, MovieSummary, NewMovie, UploadFile, UploadResult};
pub use upload::{FAILURE_MESSAGE, SUCCESS_MESSAGE, UploadForm, UploadStep};
pub use views::{MovieDetailView, MovieListView, load_movie_detail, load_movie_list};
