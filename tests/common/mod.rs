//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use movies_api::catalog::{Genre, Movie, MovieStore};
use movies_api::config::AppConfig;
use movies_api::http::MovieServer;
use movies_api::lifecycle::Shutdown;

/// A running server on an ephemeral port. Stops when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    #[allow(dead_code)]
    pub store: Arc<MovieStore>,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server seeded with `movies`.
pub async fn start_server(movies: Vec<Movie>) -> TestServer {
    start_server_with(AppConfig::default(), movies).await
}

pub async fn start_server_with(config: AppConfig, movies: Vec<Movie>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let store = Arc::new(MovieStore::new(movies));
    let shutdown = Shutdown::new();
    let server = MovieServer::new(config, store.clone());
    let signal = shutdown.wait();

    tokio::spawn(async move {
        let _ = server.run_until(listener, signal).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    TestServer {
        addr,
        client,
        store,
        shutdown,
    }
}

/// The fixture from the documented scenario plus two more records.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: "1".into(),
            title: "Matrix".into(),
            year: 1999,
            director: "Lana Wachowski".into(),
            duration: 136,
            poster: "https://example.com/matrix.jpg".into(),
            genre: vec![Genre::Action],
        },
        Movie {
            id: "2".into(),
            title: "Amelie".into(),
            year: 2001,
            director: "Jean-Pierre Jeunet".into(),
            duration: 122,
            poster: "https://example.com/amelie.jpg".into(),
            genre: vec![Genre::Comedy, Genre::Romance],
        },
        Movie {
            id: "3".into(),
            title: "Heat".into(),
            year: 1995,
            director: "Michael Mann".into(),
            duration: 170,
            poster: "https://example.com/heat.jpg".into(),
            genre: vec![Genre::Action, Genre::Drama],
        },
    ]
}

#[allow(dead_code)]
pub fn valid_payload(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "year": 1972,
        "director": "Francis Ford Coppola",
        "duration": 175,
        "poster": "https://img.example.com/godfather.jpg",
        "genre": "drama"
    })
}
