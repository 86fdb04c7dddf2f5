use crate::modules::reviews::domain::Review;
use crate::schema::reviews;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct ReviewModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}

// For inserting new reviews
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct NewReviewRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewModel {
    pub fn into_entity(self) -> Review {
        Review {
            id: self.id,
            user_id: self.user_id,
            movie_id: self.movie_id,
            rating: self.rating,
            review_text: self.review_text,
            created_at: self.created_at,
        }
    }
}

impl NewReviewRow {
    pub fn from_entity(review: &Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            movie_id: review.movie_id,
            rating: review.rating,
            review_text: review.review_text.clone(),
            created_at: review.created_at,
        }
    }
}
