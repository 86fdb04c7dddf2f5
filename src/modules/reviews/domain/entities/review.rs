use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored review. Immutable once created; there is no update or delete
/// path, so the (user, movie) review set for a movie only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(user_id: Uuid, movie_id: Uuid, rating: i32, review_text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            movie_id,
            rating,
            review_text,
            created_at: Utc::now(),
        }
    }
}

/// Review author identity as exposed on read paths
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub id: Uuid,
    pub username: String,
    pub profile_picture: Option<String>,
}

/// A review joined with its author, the shape the API returns
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithAuthor {
    pub id: Uuid,
    pub user: ReviewAuthor,
    pub movie_id: Uuid,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewWithAuthor {
    pub fn from_parts(review: Review, author: ReviewAuthor) -> Self {
        Self {
            id: review.id,
            user: author,
            movie_id: review.movie_id,
            rating: review.rating,
            review_text: review.review_text,
            created_at: review.created_at,
        }
    }
}

/// A review joined with a summary of the movie it rates, used on profile pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithMovie {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub movie_poster_url: Option<String>,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}
