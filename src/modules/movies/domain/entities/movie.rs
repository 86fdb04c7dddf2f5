use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry. `average_rating` and `total_reviews` are derived from the
/// review set and are written exclusively through
/// [`MovieRepository::update_aggregate_fields`](super::super::repositories::movie_repository::MovieRepository).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub genre: Vec<String>,
    pub release_year: i32,
    pub director: String,
    pub cast: Vec<String>,
    pub synopsis: String,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub average_rating: f32,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin-supplied fields for a new catalog entry
#[derive(Debug, Clone, Default)]
pub struct MovieDraft {
    pub title: String,
    pub genre: Vec<String>,
    pub release_year: i32,
    pub director: String,
    pub cast: Vec<String>,
    pub synopsis: String,
    pub trailer_url: Option<String>,
}

impl Movie {
    /// Aggregate fields start at (0, 0); only the aggregator moves them.
    pub fn from_draft(draft: MovieDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            genre: draft.genre,
            release_year: draft.release_year,
            director: draft.director,
            cast: draft.cast,
            synopsis: draft.synopsis,
            poster_url: None,
            trailer_url: draft.trailer_url,
            average_rating: 0.0,
            total_reviews: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Catalog listing filter; all fields are conjunctive
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Case-insensitive title substring
    pub search: Option<String>,
    /// Exact genre membership
    pub genre: Option<String>,
    /// Exact release year
    pub year: Option<i32>,
    /// Minimum average rating
    pub min_rating: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_movie_has_zeroed_aggregates() {
        let movie = Movie::from_draft(MovieDraft {
            title: "Stalker".to_string(),
            genre: vec!["Sci-Fi".to_string()],
            release_year: 1979,
            director: "Andrei Tarkovsky".to_string(),
            ..Default::default()
        });

        assert_eq!(movie.average_rating, 0.0);
        assert_eq!(movie.total_reviews, 0);
        assert!(movie.poster_url.is_none());
    }
}
