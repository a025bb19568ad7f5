use std::path::Path;

use reqwest::{Body, multipart::Part};
use serde::{Deserialize, Serialize, de::IgnoredAny};

use crate::error::{CatalogError, Result};

/// Stored documents may carry a null or missing `year` and `thumb`; the form
/// writes `year: null` itself when the input is not a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub thumb: Option<String>,
}

/// Full stored document; only `title`, `year` and `video` are needed for playback
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub video: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub blob_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `POST /movies`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: Option<i32>,
    pub thumb: String,
    pub video: String,
}

/// `GET /movies` answers with a bare message object when the catalog is empty
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MoviesResponse {
    List(Vec<MovieSummary>),
    Empty { message: IgnoredAny },
}

impl From<MoviesResponse> for Vec<MovieSummary> {
    fn from(response: MoviesResponse) -> Self {
        match response {
            MoviesResponse::List(movies) => movies,
            MoviesResponse::Empty { .. } => Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
}

impl FileKind {
    pub const HEADER: &'static str = "file-type";

    pub fn header_value(&self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Video => "video",
        }
    }
}

/// A local file ready to be sent as the single `file` multipart part.
///
/// Files opened from disk are streamed, never buffered whole.
#[derive(Debug)]
pub struct UploadFile {
    pub file_name: String,
    pub len: u64,
    file: tokio::fs::File,
}

impl UploadFile {
    /// Open a file for upload; missing or unreadable files fail here
    pub async fn open(path: &Path) -> Result<Self> {
        let unreadable = |source| CatalogError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        };

        let file = tokio::fs::File::open(path).await.map_err(unreadable)?;
        let metadata = file.metadata().await.map_err(unreadable)?;
        if !metadata.is_file() {
            return Err(unreadable(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self {
            file_name,
            len: metadata.len(),
            file,
        })
    }

    pub fn into_part(self) -> Part {
        Part::stream_with_length(Body::from(self.file), self.len).file_name(self.file_name)
    }
}

/// Lenient integer parse: leading sign and digits, anything after ignored
pub fn parse_year(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse::<i32>().ok().map(|year| sign * year)
}
