pub mod providers;
pub mod ranker;
pub mod recommendations;

pub use providers::{PosterProvider, TmdbPosterProvider};
pub use ranker::{Ranker, Recommendation, MAX_RECOMMENDATIONS};
