// src/services/catalog_service_tests.rs
//
// UNIT TESTS: Catalog Service
//
// INVARIANTS TESTED:
// - Duplicate names are rejected before any collaborator call
// - Metadata lookup failure blocks the save unless force_save is set
// - Only 1080p links are shortened; originals are archived first
// - Shortener failure never fails a save
// - Language mutation is restricted to the closed set and can never
//   empty the list

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::movie::{MediaType, Movie, TmdbDetails};
use crate::error::{AppError, AppResult};
use crate::integrations::gplinks::MockLinkShortener;
use crate::integrations::tmdb::MockMetadataProvider;
use crate::repositories::{
    InMemoryMovieRepository, MovieRepository, UnshortenedLink, UnshortenedLinkRepository,
};
use crate::services::catalog_service::{CatalogService, SaveMovieRequest, UpdateMovieRequest};
use crate::services::resolver_service::ResolverService;

#[derive(Default)]
struct InMemoryUnshortenedLinks {
    links: Mutex<Vec<UnshortenedLink>>,
}

impl UnshortenedLinkRepository for InMemoryUnshortenedLinks {
    fn list_all(&self) -> AppResult<Vec<UnshortenedLink>> {
        Ok(self.links.lock().unwrap().clone())
    }

    fn add(&self, name: &str, link: &str) -> AppResult<UnshortenedLink> {
        let record = UnshortenedLink {
            name: name.to_string(),
            link: link.to_string(),
            added_at: chrono::Utc::now(),
        };
        self.links.lock().unwrap().push(record.clone());
        Ok(record)
    }
}

struct Fixture {
    movie_repo: Arc<InMemoryMovieRepository>,
    unshortened: Arc<InMemoryUnshortenedLinks>,
    service: CatalogService,
}

fn fixture(
    movies: Vec<Movie>,
    metadata: MockMetadataProvider,
    shortener: MockLinkShortener,
) -> Fixture {
    let movie_repo = Arc::new(InMemoryMovieRepository::with_movies(movies));
    let unshortened = Arc::new(InMemoryUnshortenedLinks::default());
    let resolver = Arc::new(ResolverService::new(movie_repo.clone()));
    let service = CatalogService::new(
        movie_repo.clone(),
        unshortened.clone(),
        resolver,
        Arc::new(metadata),
        Arc::new(shortener),
    );
    Fixture {
        movie_repo,
        unshortened,
        service,
    }
}

fn movie(id: &str, name: &str) -> Movie {
    let mut m = Movie::new(name.to_string(), vec!["english".to_string()]);
    m.id = id.to_string();
    m
}

fn dune_details() -> TmdbDetails {
    TmdbDetails {
        tmdb_id: Some(438631),
        title: Some("Dune".to_string()),
        overview: Some("Paul Atreides...".to_string()),
        media_type: Some(MediaType::Movie),
        ..Default::default()
    }
}

fn watch_links(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(q, l)| (q.to_string(), l.to_string()))
        .collect()
}

#[tokio::test]
async fn test_save_with_metadata_uses_tmdb_id_and_title() {
    let mut metadata = MockMetadataProvider::new();
    metadata
        .expect_lookup()
        .times(1)
        .returning(|_, _| Ok(Some(dune_details())));
    let mut shortener = MockLinkShortener::new();
    shortener
        .expect_shorten()
        .times(1)
        .returning(|_| "https://gpl.ink/abc".to_string());

    let fx = fixture(Vec::new(), metadata, shortener);
    let outcome = fx
        .service
        .save_movie(SaveMovieRequest::new(
            "dune".to_string(),
            watch_links(&[
                ("1080p", "https://example.com/dune-1080"),
                ("4k", "https://example.com/dune-4k"),
            ]),
            vec!["english".to_string()],
        ))
        .await
        .unwrap();

    assert_eq!(outcome.movie.id, "438631");
    assert_eq!(outcome.movie.name, "Dune");
    assert!(outcome.metadata_resolved);
    assert_eq!(outcome.links_shortened, 1);
    // 1080p was rewritten, 4k passed through untouched
    assert_eq!(
        outcome.movie.watch_links.get("1080p").map(String::as_str),
        Some("https://gpl.ink/abc")
    );
    assert_eq!(
        outcome.movie.watch_links.get("4k").map(String::as_str),
        Some("https://example.com/dune-4k")
    );
    // The original 1080p link was archived
    let archived = fx.unshortened.list_all().unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].link, "https://example.com/dune-1080");
    assert_eq!(archived[0].name, "Dune");
}

#[tokio::test]
async fn test_save_duplicate_name_is_already_cataloged() {
    let metadata = MockMetadataProvider::new();
    let shortener = MockLinkShortener::new();
    let fx = fixture(vec![movie("1", "Dune")], metadata, shortener);

    let err = fx
        .service
        .save_movie(SaveMovieRequest::new(
            "DUNE".to_string(),
            watch_links(&[("720p", "https://example.com/d")]),
            vec!["english".to_string()],
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AlreadyCataloged(_)));
}

#[tokio::test]
async fn test_save_without_metadata_requires_force_save() {
    let mut metadata = MockMetadataProvider::new();
    metadata
        .expect_lookup()
        .times(1)
        .returning(|_, _| Ok(None));
    let shortener = MockLinkShortener::new();

    let fx = fixture(Vec::new(), metadata, shortener);
    let err = fx
        .service
        .save_movie(SaveMovieRequest::new(
            "Some Obscure Film".to_string(),
            watch_links(&[("720p", "https://example.com/f")]),
            vec!["hindi".to_string()],
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MetadataUnavailable(_)));
    assert!(fx.movie_repo.list_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_force_save_retries_lookup_then_assigns_store_id() {
    let mut metadata = MockMetadataProvider::new();
    metadata
        .expect_lookup()
        .times(3)
        .returning(|_, _| Err(AppError::Other("TMDB down".to_string())));
    let shortener = MockLinkShortener::new();

    let fx = fixture(vec![movie("7", "Dune")], metadata, shortener);
    let mut request = SaveMovieRequest::new(
        "Some Obscure Film".to_string(),
        watch_links(&[("720p", "https://example.com/f")]),
        vec!["hindi".to_string()],
    );
    request.force_save = true;
    request.retry_attempts = 3;

    let outcome = fx.service.save_movie(request).await.unwrap();
    assert!(!outcome.metadata_resolved);
    assert!(outcome.movie.tmdb_details.is_none());
    // Store-assigned id: one past the highest numeric id
    assert_eq!(outcome.movie.id, "8");
    assert_eq!(outcome.movie.name, "Some Obscure Film");
}

#[tokio::test]
async fn test_shortener_failure_keeps_original_and_save_succeeds() {
    let mut metadata = MockMetadataProvider::new();
    metadata
        .expect_lookup()
        .returning(|_, _| Ok(Some(dune_details())));
    let mut shortener = MockLinkShortener::new();
    // Best-effort contract: failure means "echo the original back"
    shortener
        .expect_shorten()
        .returning(|url| url.to_string());

    let fx = fixture(Vec::new(), metadata, shortener);
    let outcome = fx
        .service
        .save_movie(SaveMovieRequest::new(
            "dune".to_string(),
            watch_links(&[("1080p", "https://example.com/dune-1080")]),
            vec!["english".to_string()],
        ))
        .await
        .unwrap();

    assert_eq!(outcome.links_shortened, 0);
    assert_eq!(outcome.links_shortening_failed, 1);
    assert_eq!(
        outcome.movie.watch_links.get("1080p").map(String::as_str),
        Some("https://example.com/dune-1080")
    );
    // The stored link IS the original, so there is nothing to archive
    assert!(fx.unshortened.list_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_save_archives_nothing() {
    let mut metadata = MockMetadataProvider::new();
    // Metadata without a title, so the blank typed name survives and the
    // save fails validation after shortening already ran
    metadata.expect_lookup().returning(|_, _| {
        Ok(Some(TmdbDetails {
            tmdb_id: Some(99),
            ..Default::default()
        }))
    });
    let mut shortener = MockLinkShortener::new();
    shortener
        .expect_shorten()
        .returning(|_| "https://gpl.ink/abc".to_string());

    let fx = fixture(Vec::new(), metadata, shortener);
    let err = fx
        .service
        .save_movie(SaveMovieRequest::new(
            "   ".to_string(),
            watch_links(&[("1080p", "https://example.com/x-1080")]),
            vec!["english".to_string()],
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Domain(_)));
    assert!(fx.movie_repo.list_all().unwrap().is_empty());
    assert!(fx.unshortened.list_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_language_mutations() {
    let metadata = MockMetadataProvider::new();
    let shortener = MockLinkShortener::new();
    let fx = fixture(vec![movie("1", "Dune")], metadata, shortener);

    let updated = fx
        .service
        .update_movie(UpdateMovieRequest {
            search: "dune".to_string(),
            add_languages: vec!["hindi".to_string()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(updated.languages, vec!["english", "hindi"]);
    assert!(updated.updated_at.is_some());

    // Outside the closed set
    let err = fx
        .service
        .update_movie(UpdateMovieRequest {
            search: "dune".to_string(),
            add_languages: vec!["klingon".to_string()],
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_update_cannot_remove_all_languages() {
    let metadata = MockMetadataProvider::new();
    let shortener = MockLinkShortener::new();
    let fx = fixture(vec![movie("1", "Dune")], metadata, shortener);

    let err = fx
        .service
        .update_movie(UpdateMovieRequest {
            search: "dune".to_string(),
            remove_languages: vec!["english".to_string()],
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    // Unchanged in storage
    let stored = fx.movie_repo.get_by_id("1").unwrap().unwrap();
    assert_eq!(stored.languages, vec!["english"]);
}

#[tokio::test]
async fn test_update_rename_and_aliases() {
    let metadata = MockMetadataProvider::new();
    let shortener = MockLinkShortener::new();
    let fx = fixture(vec![movie("1", "Dune")], metadata, shortener);

    let updated = fx
        .service
        .update_movie(UpdateMovieRequest {
            search: "dune".to_string(),
            new_name: Some("Dune Part One".to_string()),
            add_aliases: vec!["Dune 2021".to_string(), "dune 2021".to_string()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(updated.name, "Dune Part One");
    // Aliases are lowercased and deduplicated
    assert_eq!(updated.aliases, vec!["dune 2021"]);

    // The record is now findable under the new alias
    let found = fx
        .service
        .update_movie(UpdateMovieRequest {
            search: "DUNE 2021".to_string(),
            remove_aliases: vec!["dune 2021".to_string()],
            ..Default::default()
        })
        .unwrap();
    assert!(found.aliases.is_empty());
}

#[tokio::test]
async fn test_update_unknown_movie_is_not_found() {
    let metadata = MockMetadataProvider::new();
    let shortener = MockLinkShortener::new();
    let fx = fixture(Vec::new(), metadata, shortener);

    let err = fx
        .service
        .update_movie(UpdateMovieRequest {
            search: "missing".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_delete_movie() {
    let metadata = MockMetadataProvider::new();
    let shortener = MockLinkShortener::new();
    let fx = fixture(vec![movie("1", "Dune")], metadata, shortener);

    fx.service.delete_movie("1").unwrap();
    assert!(matches!(
        fx.service.delete_movie("1"),
        Err(AppError::NotFound)
    ));
}
