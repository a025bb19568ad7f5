use std::path::PathBuf;

use crate::{
    api::CatalogApi,
    error::{CatalogError, Result},
    types::{FileKind, NewMovie, UploadFile, parse_year},
};

pub const SUCCESS_MESSAGE: &str = "Filme enviado com sucesso!";
pub const FAILURE_MESSAGE: &str = "Erro ao enviar filme.";

/// The network call a submission is about to make
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStep {
    Thumbnail,
    Video,
    CreateMovie,
}

impl UploadStep {
    pub fn label(&self) -> &'static str {
        match self {
            UploadStep::Thumbnail => "Uploading thumbnail",
            UploadStep::Video => "Uploading video",
            UploadStep::CreateMovie => "Creating movie record",
        }
    }
}

/// State of the upload form: the four inputs plus the message line under it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub title: String,
    pub year: String,
    pub thumb: Option<PathBuf>,
    pub video: Option<PathBuf>,
    pub message: Option<String>,
}

impl UploadForm {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        thumb: Option<PathBuf>,
        video: Option<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            thumb,
            video,
            message: None,
        }
    }

    /// Clear the inputs; the message line is not part of the form
    pub fn reset(&mut self) {
        self.title.clear();
        self.year.clear();
        self.thumb = None;
        self.video = None;
    }

    pub fn succeeded(&self) -> bool {
        self.message.as_deref() == Some(SUCCESS_MESSAGE)
    }

    pub async fn submit(&mut self, api: &dyn CatalogApi) -> Option<NewMovie> {
        self.submit_with_progress(api, |_| {}).await
    }

    /// Upload thumbnail, upload video, then create the movie record.
    ///
    /// Sets the success message and resets the form only when all three calls
    /// succeed; any failure is logged and shown as the generic failure message.
    pub async fn submit_with_progress<F>(
        &mut self,
        api: &dyn CatalogApi,
        on_step: F,
    ) -> Option<NewMovie>
    where
        F: FnMut(UploadStep),
    {
        match self.send(api, on_step).await {
            Ok(movie) => {
                tracing::info!(title = %movie.title, "movie uploaded");
                self.message = Some(SUCCESS_MESSAGE.to_string());
                self.reset();
                Some(movie)
            }
            Err(e) => {
                tracing::error!(error = %e, "movie upload failed");
                self.message = Some(FAILURE_MESSAGE.to_string());
                None
            }
        }
    }

    async fn send<F>(&self, api: &dyn CatalogApi, mut on_step: F) -> Result<NewMovie>
    where
        F: FnMut(UploadStep),
    {
        let thumb_path = self
            .thumb
            .as_deref()
            .ok_or(CatalogError::MissingFile { field: "thumb" })?;
        let video_path = self
            .video
            .as_deref()
            .ok_or(CatalogError::MissingFile { field: "video" })?;

        let thumb = UploadFile::open(thumb_path).await?;
        let video = UploadFile::open(video_path).await?;

        on_step(UploadStep::Thumbnail);
        let thumb_data = api.upload_file(FileKind::Image, thumb).await?;

        on_step(UploadStep::Video);
        let video_data = api
            .upload_file(FileKind::Video, video)
            .await
            .inspect_err(|_| {
                tracing::warn!(thumb = %thumb_data.blob_uri, "thumbnail blob left orphaned");
            })?;

        let movie = NewMovie {
            title: self.title.clone(),
            year: parse_year(&self.year),
            thumb: thumb_data.blob_uri,
            video: video_data.blob_uri,
        };

        on_step(UploadStep::CreateMovie);
        api.create_movie(&movie).await.inspect_err(|_| {
            tracing::warn!(
                thumb = %movie.thumb,
                video = %movie.video,
                "thumbnail and video blobs left orphaned"
            );
        })?;

        Ok(movie)
    }
}
