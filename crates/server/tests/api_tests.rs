//! In-process API tests for the recommendation endpoints.

mod common;

use axum::http::StatusCode;
use common::{recommended_titles, TestFixture};
use marquee_core::{Catalog, Config, MovieRecord};

fn record(title: &str, genre: &str, rating: f64, description: &str) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        genre: genre.to_string(),
        year: 2001,
        rating,
        description: description.to_string(),
    }
}

fn space_catalog() -> Catalog {
    Catalog::from_records(vec![
        record("Orbit", "Sci-Fi", 8.0, "Astronauts repair a space station in orbit"),
        record("Station", "Sci-Fi, Thriller", 7.2, "A space station crew loses contact"),
        record("Meadow", "Drama", 9.0, "A quiet summer on a farm"),
        record("Drift", "Sci-Fi, Drama", 6.0, "Astronauts drift through space"),
        record("Rocket", "Adventure, Sci-Fi", 7.8, "A homemade rocket reaches orbit"),
    ])
}

#[tokio::test]
async fn test_health() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_config_endpoint() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/config").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["query"]["default_count"], 5);
    assert_eq!(response.body["recommender"]["candidate_pool"], 10);
}

#[tokio::test]
async fn test_list_movies() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/movies").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 20);
    assert_eq!(response.body["movies"][0]["title"], "The Shawshank Redemption");
    assert_eq!(response.body["movies"][6]["id"], 6);
}

#[tokio::test]
async fn test_get_movie() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/movies/6").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "The Matrix");
    assert_eq!(response.body["genres"][1], "Sci-Fi");
    assert_eq!(response.body["year"], 1999);
}

#[tokio::test]
async fn test_get_movie_not_found() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/movies/999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body["error"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_list_genres() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/genres").await;
    assert_eq!(response.status, StatusCode::OK);
    let genres: Vec<&str> = response.body["genres"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g.as_str().unwrap())
        .collect();
    let mut sorted = genres.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(genres, sorted);
    assert!(genres.contains(&"Sci-Fi"));
}

#[tokio::test]
async fn test_recommendations_default_flow() {
    let fixture = TestFixture::with_catalog(space_catalog(), Config::default());
    let response = fixture.get("/api/v1/recommendations?title=Orbit").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["reference"]["title"], "Orbit");
    // Drift (6.0) falls below the default minimum rating of 7.0.
    let titles = recommended_titles(&response.body);
    assert!(!titles.contains(&"Drift".to_string()));
    assert!(!titles.contains(&"Orbit".to_string()));
    assert_eq!(titles.last().map(String::as_str), Some("Meadow"));
    assert_eq!(response.body["total"], titles.len());
}

#[tokio::test]
async fn test_recommendations_scores_descend() {
    let fixture = TestFixture::with_catalog(space_catalog(), Config::default());
    let response = fixture
        .get("/api/v1/recommendations?title=Orbit&min_rating=0")
        .await;
    let scores: Vec<f64> = response.body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["score"].as_f64().unwrap())
        .collect();
    assert_eq!(scores.len(), 4);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(scores[3], 0.0);
}

#[tokio::test]
async fn test_recommendations_genre_filter() {
    let fixture = TestFixture::with_catalog(space_catalog(), Config::default());
    let response = fixture
        .get("/api/v1/recommendations?title=Orbit&genre=Thriller&min_rating=0")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(recommended_titles(&response.body), vec!["Station"]);
}

#[tokio::test]
async fn test_recommendations_count() {
    let fixture = TestFixture::new();
    let response = fixture
        .get("/api/v1/recommendations?title=Inception&count=2&min_rating=0")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 2);
}

#[tokio::test]
async fn test_recommendations_rating_excludes_everything() {
    let fixture = TestFixture::new();
    let response = fixture
        .get("/api/v1/recommendations?title=The%20Matrix&min_rating=9.5")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 0);
    assert!(recommended_titles(&response.body).is_empty());
}

#[tokio::test]
async fn test_recommendations_reference_present_when_filtered_empty() {
    let fixture = TestFixture::new();
    let response = fixture
        .get("/api/v1/recommendations?title=Alien&genre=Western")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["reference"]["title"], "Alien");
    assert_eq!(response.body["reference"]["id"], 18);
    assert_eq!(response.body["total"], 0);
}

#[tokio::test]
async fn test_recommendations_unknown_title() {
    let fixture = TestFixture::new();
    let path = format!(
        "/api/v1/recommendations?title={}",
        urlencoding::encode("Unknown Title")
    );
    let response = fixture.get(&path).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Movie not found: Unknown Title");
}

#[tokio::test]
async fn test_recommendations_count_out_of_range() {
    let fixture = TestFixture::new();
    for count in [0, 11] {
        let response = fixture
            .get(&format!("/api/v1/recommendations?title=Alien&count={}", count))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_recommendations_missing_title() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/recommendations").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_candidate_pool_limits_results() {
    let mut config = Config::default();
    config.recommender.candidate_pool = 2;
    let fixture = TestFixture::with_config(config);
    let response = fixture
        .get("/api/v1/recommendations?title=Alien&count=10&min_rating=0")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 2);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let fixture = TestFixture::new();
    fixture.get("/api/v1/health").await;
    let response = fixture.get("/metrics").await;
    assert_eq!(response.status, StatusCode::OK);
    let text = response.body.as_str().unwrap();
    assert!(text.contains("marquee_http_requests_total"));
    assert!(text.contains("marquee_index_builds_total"));
}
