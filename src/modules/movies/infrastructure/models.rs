use crate::modules::movies::domain::Movie;
use crate::schema::movies;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct MovieModel {
    pub id: Uuid,
    pub title: String,
    pub genre: serde_json::Value,
    pub release_year: i32,
    pub director: String,
    pub cast_members: serde_json::Value,
    pub synopsis: String,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub average_rating: f32,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new movies
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovieRow {
    pub id: Uuid,
    pub title: String,
    pub genre: serde_json::Value,
    pub release_year: i32,
    pub director: String,
    pub cast_members: serde_json::Value,
    pub synopsis: String,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub average_rating: f32,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MovieModel {
    pub fn into_entity(self) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            genre: serde_json::from_value(self.genre).unwrap_or_default(),
            release_year: self.release_year,
            director: self.director,
            cast: serde_json::from_value(self.cast_members).unwrap_or_default(),
            synopsis: self.synopsis,
            poster_url: self.poster_url,
            trailer_url: self.trailer_url,
            average_rating: self.average_rating,
            total_reviews: self.total_reviews,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl NewMovieRow {
    pub fn from_entity(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            genre: serde_json::Value::from(movie.genre.clone()),
            release_year: movie.release_year,
            director: movie.director.clone(),
            cast_members: serde_json::Value::from(movie.cast.clone()),
            synopsis: movie.synopsis.clone(),
            poster_url: movie.poster_url.clone(),
            trailer_url: movie.trailer_url.clone(),
            average_rating: movie.average_rating,
            total_reviews: movie.total_reviews,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}
