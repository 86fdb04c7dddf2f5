use chrono::Datelike;
use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::AppError;

pub const MAX_REVIEW_TEXT_CHARS: usize = 1000;
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;
pub const EARLIEST_RELEASE_YEAR: i32 = 1888;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_\-]+$").unwrap())
}

pub struct Validator;

impl Validator {
    pub fn validate_rating(rating: i32) -> Result<(), AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::ValidationError(format!(
                "rating: must be an integer between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }
        Ok(())
    }

    pub fn validate_review_text(text: &str) -> Result<(), AppError> {
        if text.is_empty() {
            return Err(AppError::ValidationError(
                "reviewText: cannot be empty".to_string(),
            ));
        }
        // Bound is in characters, not bytes
        if text.chars().count() > MAX_REVIEW_TEXT_CHARS {
            return Err(AppError::ValidationError(format!(
                "reviewText: too long (max {} characters)",
                MAX_REVIEW_TEXT_CHARS
            )));
        }
        Ok(())
    }

    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        if title.is_empty() {
            return Err(AppError::ValidationError(
                "title: cannot be empty".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "title: too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_release_year(year: i32) -> Result<(), AppError> {
        let max_year = chrono::Utc::now().year() + 1;
        if year < EARLIEST_RELEASE_YEAR || year > max_year {
            return Err(AppError::ValidationError(format!(
                "releaseYear: must be between {} and {}",
                EARLIEST_RELEASE_YEAR, max_year
            )));
        }
        Ok(())
    }

    pub fn validate_username(username: &str) -> Result<(), AppError> {
        if username.len() < 3 || username.len() > 30 {
            return Err(AppError::ValidationError(
                "username: must be 3-30 characters".to_string(),
            ));
        }
        if !username_regex().is_match(username) {
            return Err(AppError::ValidationError(
                "username: contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        if !email_regex().is_match(email) {
            return Err(AppError::ValidationError(
                "email: must be a valid email address".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), AppError> {
        if password.len() < 6 {
            return Err(AppError::ValidationError(
                "password: must be at least 6 characters".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(Validator::validate_rating(0).is_err());
        assert!(Validator::validate_rating(1).is_ok());
        assert!(Validator::validate_rating(5).is_ok());
        assert!(Validator::validate_rating(6).is_err());
    }

    #[test]
    fn review_text_char_limit_is_in_characters() {
        let exactly_max: String = "å".repeat(MAX_REVIEW_TEXT_CHARS);
        assert!(Validator::validate_review_text(&exactly_max).is_ok());

        let one_over: String = "å".repeat(MAX_REVIEW_TEXT_CHARS + 1);
        assert!(Validator::validate_review_text(&one_over).is_err());

        assert!(Validator::validate_review_text("").is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(Validator::validate_email("user@example.com").is_ok());
        assert!(Validator::validate_email("not-an-email").is_err());
        assert!(Validator::validate_email("a@b").is_err());
    }

    #[test]
    fn username_rules() {
        assert!(Validator::validate_username("ab").is_err());
        assert!(Validator::validate_username("film_fan-42").is_ok());
        assert!(Validator::validate_username("bad user!").is_err());
    }

    #[test]
    fn release_year_bounds() {
        assert!(Validator::validate_release_year(1887).is_err());
        assert!(Validator::validate_release_year(1888).is_ok());
        assert!(Validator::validate_release_year(1999).is_ok());
        assert!(Validator::validate_release_year(3000).is_err());
    }
}
