use std::sync::Arc;

use crate::modules::movies::{MovieRepositoryImpl, MovieService, PosterStorage};
use crate::modules::reviews::domain::RatingAggregator;
use crate::modules::reviews::{ReviewRepositoryImpl, ReviewService};
use crate::modules::users::{
    AuthService, ProfileService, TokenService, UserRepositoryImpl,
};
use crate::modules::watchlist::{WatchlistRepositoryImpl, WatchlistService};
use crate::shared::{Config, Database};

/// Shared application state handed to every handler. Services are wired once
/// at startup against the repository implementations.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tokens: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub profile_service: Arc<ProfileService>,
    pub movie_service: Arc<MovieService>,
    pub poster_storage: Arc<PosterStorage>,
    pub review_service: Arc<ReviewService>,
    pub watchlist_service: Arc<WatchlistService>,
}

impl AppState {
    pub fn build(config: Config, db: Arc<Database>) -> Self {
        let movie_repo = Arc::new(MovieRepositoryImpl::new(Arc::clone(&db)));
        let review_repo = Arc::new(ReviewRepositoryImpl::new(Arc::clone(&db)));
        let user_repo = Arc::new(UserRepositoryImpl::new(Arc::clone(&db)));
        let watchlist_repo = Arc::new(WatchlistRepositoryImpl::new(Arc::clone(&db)));

        let tokens = Arc::new(TokenService::new(&config.jwt_secret));

        let aggregator = Arc::new(RatingAggregator::new(
            movie_repo.clone(),
            review_repo.clone(),
        ));

        Self {
            tokens: Arc::clone(&tokens),
            auth_service: Arc::new(AuthService::new(user_repo.clone(), tokens)),
            profile_service: Arc::new(ProfileService::new(
                user_repo.clone(),
                review_repo.clone(),
            )),
            movie_service: Arc::new(MovieService::new(
                movie_repo.clone(),
                review_repo.clone(),
            )),
            poster_storage: Arc::new(PosterStorage::new(
                config.upload_dir.clone(),
                movie_repo.clone(),
            )),
            review_service: Arc::new(ReviewService::new(
                review_repo,
                movie_repo.clone(),
                user_repo,
                aggregator,
            )),
            watchlist_service: Arc::new(WatchlistService::new(watchlist_repo, movie_repo)),
            config: Arc::new(config),
        }
    }
}
