use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Poster lookup timeout used when `POSTER_TIMEOUT_MS` is unset
pub const DEFAULT_POSTER_TIMEOUT_MS: u64 = 2000;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the snapshot files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_movie_list_file")]
    pub movie_list_file: String,

    #[serde(default = "default_movie_similarity_file")]
    pub movie_similarity_file: String,

    #[serde(default = "default_book_titles_file")]
    pub book_titles_file: String,

    #[serde(default = "default_book_similarity_file")]
    pub book_similarity_file: String,

    #[serde(default = "default_popular_books_file")]
    pub popular_books_file: String,

    /// Origins allowed to make credentialed cross-origin requests (comma separated)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// TMDB API key; poster lookups are unavailable without it
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    #[serde(default = "default_tmdb_image_base_url")]
    pub tmdb_image_base_url: String,

    /// Timeout for a single poster lookup, in milliseconds
    #[serde(default = "default_poster_timeout_ms")]
    pub poster_timeout_ms: u64,

    /// Attach posters to movie recommendations
    #[serde(default)]
    pub enable_posters: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_movie_list_file() -> String {
    "movie_list.json".to_string()
}

fn default_movie_similarity_file() -> String {
    "similarity.json".to_string()
}

fn default_book_titles_file() -> String {
    "book_titles.json".to_string()
}

fn default_book_similarity_file() -> String {
    "book_similarity.json".to_string()
}

fn default_popular_books_file() -> String {
    "popular_books.csv".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5174".to_string(),
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
        "https://next-pick.vercel.app".to_string(),
    ]
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_poster_timeout_ms() -> u64 {
    DEFAULT_POSTER_TIMEOUT_MS
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn movie_list_path(&self) -> PathBuf {
        self.data_dir.join(&self.movie_list_file)
    }

    pub fn movie_similarity_path(&self) -> PathBuf {
        self.data_dir.join(&self.movie_similarity_file)
    }

    pub fn book_titles_path(&self) -> PathBuf {
        self.data_dir.join(&self.book_titles_file)
    }

    pub fn book_similarity_path(&self) -> PathBuf {
        self.data_dir.join(&self.book_similarity_file)
    }

    pub fn popular_books_path(&self) -> PathBuf {
        self.data_dir.join(&self.popular_books_file)
    }

    pub fn poster_timeout(&self) -> Duration {
        Duration::from_millis(self.poster_timeout_ms)
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
