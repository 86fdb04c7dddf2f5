use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::log_info;
use crate::modules::movies::domain::MovieRepository;
use crate::shared::errors::{AppError, AppResult};

/// 5 MiB upload cap, matching what the catalog UI enforces
pub const MAX_POSTER_BYTES: usize = 5 * 1024 * 1024;

const POSTERS_SUBDIR: &str = "posters";

/// Stores uploaded poster images on disk, named after the movie they belong
/// to, and records the public URL on the movie row.
///
/// Poster attachment is deliberately not atomic with movie creation; a movie
/// may exist transiently without a resolved poster reference.
pub struct PosterStorage {
    upload_dir: PathBuf,
    movie_repo: Arc<dyn MovieRepository>,
}

impl PosterStorage {
    pub fn new(upload_dir: impl Into<PathBuf>, movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            movie_repo,
        }
    }

    /// Validates, writes and registers a poster for an existing movie.
    /// Returns the public URL stored on the movie record.
    pub async fn attach_poster(
        &self,
        movie_id: &Uuid,
        content_type: &str,
        original_filename: &str,
        bytes: &[u8],
    ) -> AppResult<String> {
        if !content_type.starts_with("image/") {
            return Err(AppError::ValidationError(
                "poster: only image files are allowed".to_string(),
            ));
        }
        if bytes.is_empty() {
            return Err(AppError::ValidationError(
                "poster: file is empty".to_string(),
            ));
        }
        if bytes.len() > MAX_POSTER_BYTES {
            return Err(AppError::ValidationError(format!(
                "poster: file too large (max {} bytes)",
                MAX_POSTER_BYTES
            )));
        }

        let filename = Self::poster_filename(movie_id, original_filename);

        let dir = self.upload_dir.join(POSTERS_SUBDIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {}", e)))?;

        let path = dir.join(&filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store poster: {}", e)))?;

        let public_url = format!("/uploads/{}/{}", POSTERS_SUBDIR, filename);
        self.movie_repo.set_poster_url(movie_id, &public_url).await?;

        log_info!("Stored poster for movie {} at {}", movie_id, public_url);
        Ok(public_url)
    }

    /// `<movie id>.<original extension>`; extension defaults to `jpg` when
    /// the upload carries none. The client-supplied name never reaches disk.
    fn poster_filename(movie_id: &Uuid, original_filename: &str) -> String {
        let extension = Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| e.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or("jpg");
        format!("{}.{}", movie_id, extension.to_lowercase())
    }
}
