use serde::{Deserialize, Serialize};

/// Single movie recommendation, optionally decorated with a poster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecommendation {
    pub title: String,
    pub poster_url: Option<String>,
    pub tmdb_id: Option<i64>,
}

impl MovieRecommendation {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            poster_url: None,
            tmdb_id: None,
        }
    }

    pub fn with_poster(mut self, poster: Poster) -> Self {
        self.poster_url = Some(poster.url);
        self.tmdb_id = poster.tmdb_id;
        self
    }
}

/// Resolved poster image for a movie title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poster {
    pub url: String,
    pub tmdb_id: Option<i64>,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw response of TMDB's `/search/movie`
///
/// Results stay untyped; only the top hit is ever decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

impl TmdbSearchResponse {
    /// Decodes the most relevant result, if there is one
    pub fn top_result(self) -> Result<Option<TmdbMovie>, serde_json::Error> {
        self.results
            .into_iter()
            .next()
            .map(serde_json::from_value)
            .transpose()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_poster() {
        let rec = MovieRecommendation::new("Avatar").with_poster(Poster {
            url: "https://image.tmdb.org/t/p/w500/abc.jpg".to_string(),
            tmdb_id: Some(19995),
        });
        assert_eq!(rec.tmdb_id, Some(19995));
        assert_eq!(
            rec.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
    }

    #[test]
    fn test_tmdb_top_result() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 19995, "title": "Avatar", "poster_path": "/kyeqWdyUXW608qlYkRqosgbbJyK.jpg"},
                {"id": 76600, "title": "Avatar: The Way of Water", "poster_path": null}
            ],
            "total_results": 2
        }"#;

        let response: TmdbSearchResponse = serde_json::from_str(json).unwrap();
        let top = response.top_result().unwrap().unwrap();
        assert_eq!(top.id, Some(19995));
        assert_eq!(
            top.poster_path.as_deref(),
            Some("/kyeqWdyUXW608qlYkRqosgbbJyK.jpg")
        );
    }

    #[test]
    fn test_tmdb_malformed_later_result_ignored() {
        let json = r#"{"results": [
            {"title": "No Id", "poster_path": "/noid.jpg"},
            {"id": "not-a-number", "poster_path": 7}
        ]}"#;

        let response: TmdbSearchResponse = serde_json::from_str(json).unwrap();
        let top = response.top_result().unwrap().unwrap();
        assert_eq!(top.id, None);
        assert_eq!(top.poster_path.as_deref(), Some("/noid.jpg"));
    }

    #[test]
    fn test_tmdb_empty_results() {
        let response: TmdbSearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.top_result().unwrap().is_none());
    }
}
