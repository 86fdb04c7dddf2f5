//! End-to-end review workflow tests against a real Postgres instance.
//!
//! Run with `cargo test -- --ignored` and a DATABASE_URL pointing at a
//! disposable database; the schema is migrated on first connection.

use std::sync::Arc;

use diesel_migrations::MigrationHarness;
use uuid::Uuid;

use cinelog::modules::movies::domain::{Movie, MovieDraft, MovieRepository};
use cinelog::modules::movies::MovieRepositoryImpl;
use cinelog::modules::reviews::domain::RatingAggregator;
use cinelog::modules::reviews::{ReviewRepositoryImpl, ReviewService};
use cinelog::modules::users::domain::{User, UserRepository, UserRole};
use cinelog::modules::users::UserRepositoryImpl;
use cinelog::shared::errors::AppError;
use cinelog::shared::Database;
use cinelog::MIGRATIONS;

struct TestContext {
    movie_repo: Arc<MovieRepositoryImpl>,
    user_repo: Arc<UserRepositoryImpl>,
    service: ReviewService,
}

fn setup() -> TestContext {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let db = Arc::new(Database::new(&url).expect("database"));

    let mut conn = db.get_connection().expect("connection");
    conn.run_pending_migrations(MIGRATIONS).expect("migrations");
    drop(conn);

    let movie_repo = Arc::new(MovieRepositoryImpl::new(Arc::clone(&db)));
    let review_repo = Arc::new(ReviewRepositoryImpl::new(Arc::clone(&db)));
    let user_repo = Arc::new(UserRepositoryImpl::new(Arc::clone(&db)));

    let aggregator = Arc::new(RatingAggregator::new(
        movie_repo.clone(),
        review_repo.clone(),
    ));
    let service = ReviewService::new(
        review_repo,
        movie_repo.clone(),
        user_repo.clone(),
        aggregator,
    );

    TestContext {
        movie_repo,
        user_repo,
        service,
    }
}

async fn seed_movie(ctx: &TestContext) -> Movie {
    ctx.movie_repo
        .create(&Movie::from_draft(MovieDraft {
            title: format!("Test Film {}", Uuid::new_v4()),
            genre: vec!["Drama".to_string()],
            release_year: 2001,
            director: "Nobody".to_string(),
            cast: vec![],
            synopsis: "A film that exists only in tests.".to_string(),
            trailer_url: None,
        }))
        .await
        .expect("movie")
}

async fn seed_user(ctx: &TestContext) -> User {
    let suffix = Uuid::new_v4().simple().to_string();
    ctx.user_repo
        .insert(&User::new(
            format!("user_{}", &suffix[..8]),
            format!("{}@example.com", &suffix[..8]),
            "not-a-real-hash".to_string(),
            UserRole::Standard,
        ))
        .await
        .expect("user")
}

#[tokio::test]
#[ignore]
async fn submission_updates_aggregates_step_by_step() {
    let ctx = setup();
    let movie = seed_movie(&ctx).await;
    assert_eq!(movie.average_rating, 0.0);
    assert_eq!(movie.total_reviews, 0);

    let first = seed_user(&ctx).await;
    ctx.service
        .submit_review(&movie.id, &first.id, 4, "Great film".to_string())
        .await
        .expect("first review");

    let after_first = ctx
        .movie_repo
        .find_by_id(&movie.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after_first.average_rating, 4.0);
    assert_eq!(after_first.total_reviews, 1);

    let second = seed_user(&ctx).await;
    ctx.service
        .submit_review(&movie.id, &second.id, 2, "Not for me".to_string())
        .await
        .expect("second review");

    let after_second = ctx
        .movie_repo
        .find_by_id(&movie.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after_second.average_rating, 3.0);
    assert_eq!(after_second.total_reviews, 2);
}

#[tokio::test]
#[ignore]
async fn second_review_for_same_pair_is_rejected() {
    let ctx = setup();
    let movie = seed_movie(&ctx).await;
    let user = seed_user(&ctx).await;

    ctx.service
        .submit_review(&movie.id, &user.id, 5, "once".to_string())
        .await
        .expect("first");

    let err = ctx
        .service
        .submit_review(&movie.id, &user.id, 1, "twice".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateReview));

    let reviews = ctx.service.list_reviews(&movie.id).await.unwrap();
    assert_eq!(reviews.len(), 1);
}

#[tokio::test]
#[ignore]
async fn racing_submissions_for_same_pair_store_exactly_one_review() {
    let ctx = setup();
    let movie = seed_movie(&ctx).await;
    let user = seed_user(&ctx).await;

    // Both tasks pass the pre-check concurrently; the unique index decides.
    let a = ctx
        .service
        .submit_review(&movie.id, &user.id, 5, "race a".to_string());
    let b = ctx
        .service
        .submit_review(&movie.id, &user.id, 3, "race b".to_string());
    let (ra, rb) = tokio::join!(a, b);

    let successes = [&ra, &rb].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one racing submission may win");
    for r in [ra, rb] {
        if let Err(e) = r {
            assert!(matches!(e, AppError::DuplicateReview));
        }
    }

    let reviews = ctx.service.list_reviews(&movie.id).await.unwrap();
    assert_eq!(reviews.len(), 1);

    let stored = ctx
        .movie_repo
        .find_by_id(&movie.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.total_reviews, 1);
}

#[tokio::test]
#[ignore]
async fn submitting_against_missing_movie_creates_nothing() {
    let ctx = setup();
    let user = seed_user(&ctx).await;
    let ghost = Uuid::new_v4();

    let err = ctx
        .service
        .submit_review(&ghost, &user.id, 4, "into the void".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let reviews = ctx.service.list_reviews(&ghost).await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
#[ignore]
async fn recompute_twice_persists_identical_values() {
    let ctx = setup();
    let movie = seed_movie(&ctx).await;
    let user = seed_user(&ctx).await;

    ctx.service
        .submit_review(&movie.id, &user.id, 3, "steady".to_string())
        .await
        .unwrap();

    let review_repo = Arc::new(ReviewRepositoryImpl::new(Arc::new(
        Database::new(&std::env::var("DATABASE_URL").unwrap()).unwrap(),
    )));
    let aggregator = RatingAggregator::new(ctx.movie_repo.clone(), review_repo);

    let first = aggregator.recompute(&movie.id).await.unwrap();
    let second = aggregator.recompute(&movie.id).await.unwrap();
    assert_eq!(first, second);

    let stored = ctx
        .movie_repo
        .find_by_id(&movie.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!((stored.average_rating, stored.total_reviews), first);
}
