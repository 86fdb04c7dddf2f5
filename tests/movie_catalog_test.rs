//! Catalog listing filter tests against a real Postgres instance.
//!
//! Run with `cargo test -- --ignored` and a DATABASE_URL pointing at a
//! disposable database. Seeded titles carry a per-test marker so the
//! assertions are stable against whatever else the database holds.

use std::sync::Arc;

use diesel_migrations::MigrationHarness;
use uuid::Uuid;

use cinelog::modules::movies::domain::{Movie, MovieDraft, MovieFilter, MovieRepository};
use cinelog::modules::movies::MovieRepositoryImpl;
use cinelog::shared::application::PaginationParams;
use cinelog::shared::Database;
use cinelog::MIGRATIONS;

fn setup() -> Arc<MovieRepositoryImpl> {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let db = Arc::new(Database::new(&url).expect("database"));

    let mut conn = db.get_connection().expect("connection");
    conn.run_pending_migrations(MIGRATIONS).expect("migrations");
    drop(conn);

    Arc::new(MovieRepositoryImpl::new(db))
}

fn marker() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

async fn seed(
    repo: &MovieRepositoryImpl,
    title: String,
    genre: Vec<String>,
    release_year: i32,
) -> Movie {
    repo.create(&Movie::from_draft(MovieDraft {
        title,
        genre,
        release_year,
        director: "Nobody".to_string(),
        cast: vec![],
        synopsis: "Seeded for catalog filter tests.".to_string(),
        trailer_url: None,
    }))
    .await
    .expect("movie")
}

async fn list_titles(repo: &MovieRepositoryImpl, filter: &MovieFilter) -> Vec<String> {
    repo.list(filter, &PaginationParams::new(1, 50))
        .await
        .expect("list")
        .items
        .into_iter()
        .map(|m| m.title)
        .collect()
}

#[tokio::test]
#[ignore]
async fn search_narrows_to_title_substring_case_insensitively() {
    let repo = setup();
    let tag = marker();

    seed(&repo, format!("Winter Light {}", tag), vec!["Drama".into()], 1963).await;
    seed(&repo, format!("Summer Interlude {}", tag), vec!["Drama".into()], 1951).await;

    let filter = MovieFilter {
        search: Some(format!("winter light {}", tag)),
        ..Default::default()
    };
    let titles = list_titles(&repo, &filter).await;
    assert_eq!(titles, vec![format!("Winter Light {}", tag)]);
}

#[tokio::test]
#[ignore]
async fn percent_in_search_matches_literally_not_as_wildcard() {
    let repo = setup();
    let tag = marker();

    // An unescaped % would make the second title match too.
    seed(&repo, format!("100% Wolf {}", tag), vec!["Animation".into()], 2020).await;
    seed(&repo, format!("100x Wolf {}", tag), vec!["Animation".into()], 2020).await;

    let filter = MovieFilter {
        search: Some(format!("100% Wolf {}", tag)),
        ..Default::default()
    };
    let titles = list_titles(&repo, &filter).await;
    assert_eq!(titles, vec![format!("100% Wolf {}", tag)]);
}

#[tokio::test]
#[ignore]
async fn underscore_in_search_matches_literally_not_any_character() {
    let repo = setup();
    let tag = marker();

    // An unescaped _ would match the X as well.
    seed(&repo, format!("Red_Line {}", tag), vec!["Action".into()], 2009).await;
    seed(&repo, format!("RedXLine {}", tag), vec!["Action".into()], 2009).await;

    let filter = MovieFilter {
        search: Some(format!("Red_Line {}", tag)),
        ..Default::default()
    };
    let titles = list_titles(&repo, &filter).await;
    assert_eq!(titles, vec![format!("Red_Line {}", tag)]);
}

#[tokio::test]
#[ignore]
async fn genre_filter_requires_exact_membership() {
    let repo = setup();
    let tag = marker();
    let rare_genre = format!("Genre-{}", tag);

    seed(
        &repo,
        format!("Tagged {}", tag),
        vec!["Drama".to_string(), rare_genre.clone()],
        1999,
    )
    .await;
    seed(&repo, format!("Untagged {}", tag), vec!["Drama".to_string()], 1999).await;

    let filter = MovieFilter {
        genre: Some(rare_genre),
        ..Default::default()
    };
    let titles = list_titles(&repo, &filter).await;
    assert_eq!(titles, vec![format!("Tagged {}", tag)]);

    // A substring of a stored genre is not a member
    let filter = MovieFilter {
        genre: Some(format!("Genre-{}", &tag[..4])),
        ..Default::default()
    };
    assert!(list_titles(&repo, &filter).await.is_empty());
}

#[tokio::test]
#[ignore]
async fn year_filter_is_exact() {
    let repo = setup();
    let tag = marker();

    seed(&repo, format!("Blow-Up {}", tag), vec!["Mystery".into()], 1966).await;
    seed(&repo, format!("Chungking Express {}", tag), vec!["Romance".into()], 1994).await;

    let filter = MovieFilter {
        search: Some(tag.clone()),
        year: Some(1966),
        ..Default::default()
    };
    let result = repo
        .list(&filter, &PaginationParams::new(1, 50))
        .await
        .expect("list");
    assert_eq!(result.total_count, 1);
    assert_eq!(result.items[0].release_year, 1966);
}

#[tokio::test]
#[ignore]
async fn min_rating_filter_drops_movies_below_threshold() {
    let repo = setup();
    let tag = marker();

    let acclaimed = seed(&repo, format!("Acclaimed {}", tag), vec!["Drama".into()], 2001).await;
    let panned = seed(&repo, format!("Panned {}", tag), vec!["Drama".into()], 2001).await;

    repo.update_aggregate_fields(&acclaimed.id, 4.5, 2)
        .await
        .expect("aggregate write");
    repo.update_aggregate_fields(&panned.id, 2.0, 1)
        .await
        .expect("aggregate write");

    let filter = MovieFilter {
        search: Some(tag.clone()),
        min_rating: Some(4.0),
        ..Default::default()
    };
    let titles = list_titles(&repo, &filter).await;
    assert_eq!(titles, vec![format!("Acclaimed {}", tag)]);

    // The threshold is inclusive
    let filter = MovieFilter {
        search: Some(tag.clone()),
        min_rating: Some(4.5),
        ..Default::default()
    };
    assert_eq!(list_titles(&repo, &filter).await.len(), 1);
}

#[tokio::test]
#[ignore]
async fn conjunctive_filters_narrow_together() {
    let repo = setup();
    let tag = marker();

    seed(
        &repo,
        format!("Target {}", tag),
        vec!["Thriller".to_string(), format!("Genre-{}", tag)],
        1973,
    )
    .await;
    seed(
        &repo,
        format!("Wrong Year {}", tag),
        vec![format!("Genre-{}", tag)],
        1985,
    )
    .await;
    seed(&repo, format!("Wrong Genre {}", tag), vec!["Thriller".to_string()], 1973).await;

    let filter = MovieFilter {
        search: Some(tag.clone()),
        genre: Some(format!("Genre-{}", tag)),
        year: Some(1973),
        ..Default::default()
    };
    let titles = list_titles(&repo, &filter).await;
    assert_eq!(titles, vec![format!("Target {}", tag)]);
}
