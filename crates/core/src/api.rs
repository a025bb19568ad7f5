use reqwest::{Client, Response, StatusCode, Url, multipart};

use crate::{
    config::ClientConfig,
    error::{CatalogError, Result},
    types::{FileKind, MovieDetail, MovieSummary, MoviesResponse, NewMovie, UploadFile, UploadResult},
};

/// The four catalog endpoints the views and the upload form talk to
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /movies`
    async fn list_movies(&self) -> Result<Vec<MovieSummary>>;

    /// `GET /movies/:id`
    async fn get_movie(&self, id: &str) -> Result<MovieDetail>;

    /// `POST /upload` with a single-file multipart body
    async fn upload_file(&self, kind: FileKind, file: UploadFile) -> Result<UploadResult>;

    /// `POST /movies`
    async fn create_movie(&self, movie: &NewMovie) -> Result<()>;
}

pub struct HttpCatalog {
    client: Client,
    config: ClientConfig,
}

impl HttpCatalog {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn movie_url(&self, id: &str) -> Result<Url> {
        let base = self.config.endpoint("movies");
        let mut url = Url::parse(&base).map_err(|e| CatalogError::InvalidBaseUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;

        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidBaseUrl {
                url: base.clone(),
                reason: "cannot be a base".to_string(),
            })?
            .push(id);

        Ok(url)
    }
}

async fn ensure_success(method: &'static str, response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(CatalogError::Status {
        method,
        url,
        status,
        body,
    })
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalog {
    async fn list_movies(&self) -> Result<Vec<MovieSummary>> {
        let url = self.config.endpoint("movies");
        tracing::debug!(%url, "fetching movie list");

        let response = self.client.get(&url).send().await?;
        let response = ensure_success("GET", response).await?;
        let movies: MoviesResponse = response.json().await?;

        Ok(movies.into())
    }

    async fn get_movie(&self, id: &str) -> Result<MovieDetail> {
        let url = self.movie_url(id)?;
        tracing::debug!(%url, "fetching movie detail");

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { id: id.to_string() });
        }

        let response = ensure_success("GET", response).await?;
        Ok(response.json().await?)
    }

    async fn upload_file(&self, kind: FileKind, file: UploadFile) -> Result<UploadResult> {
        let url = self.config.endpoint("upload");
        tracing::debug!(
            %url,
            kind = kind.header_value(),
            file = %file.file_name,
            bytes = file.len,
            "uploading file"
        );

        let form = multipart::Form::new().part("file", file.into_part());

        let response = self
            .client
            .post(&url)
            .header(FileKind::HEADER, kind.header_value())
            .multipart(form)
            .send()
            .await?;

        let response = ensure_success("POST", response).await?;
        Ok(response.json().await?)
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<()> {
        let url = self.config.endpoint("movies");
        tracing::debug!(%url, title = %movie.title, "creating movie record");

        let response = self.client.post(&url).json(movie).send().await?;
        let response = ensure_success("POST", response).await?;

        // The acknowledgement is plain text; only the status matters
        let ack = response.text().await?;
        tracing::debug!(%ack, "movie record created");

        Ok(())
    }
}
