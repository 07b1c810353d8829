use std::cmp::Ordering;

use crate::store::{Catalog, CatalogError};

/// Upper bound on recommendations per request
pub const MAX_RECOMMENDATIONS: usize = 20;

/// A ranked neighbour of the query item
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub index: usize,
    pub title: String,
    pub score: f32,
}

/// Nearest-neighbour lookup over a catalog's similarity matrix
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    catalog: &'a Catalog,
}

impl<'a> Ranker<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Returns up to `count` items most similar to `title`, best first.
    ///
    /// `count` is clamped to `1..=MAX_RECOMMENDATIONS`. Equal scores keep
    /// catalog order, and NaN scores rank last.
    ///
    /// The top-ranked entry is skipped on the assumption that it is the query
    /// item itself (self-similarity is maximal). It is not checked against the
    /// query index: if an earlier item ties the query's self-score, that item
    /// is skipped and the query itself appears in the results.
    pub fn recommend(&self, title: &str, count: usize) -> Result<Vec<Recommendation>, CatalogError> {
        let count = count.clamp(1, MAX_RECOMMENDATIONS);
        let index = self.catalog.index_of(title)?;

        let mut ranked: Vec<(usize, f32)> = self
            .catalog
            .row(index)
            .iter()
            .copied()
            .enumerate()
            .collect();

        // sort_by is stable, so ties stay in index order
        ranked.sort_by(|a, b| descending(a.1, b.1));

        let recommendations = ranked
            .into_iter()
            .skip(1)
            .take(count)
            .map(|(other, score)| Recommendation {
                index: other,
                title: self.catalog.title_at(other).to_string(),
                score,
            })
            .collect();

        Ok(recommendations)
    }
}

fn descending(a: f32, b: f32) -> Ordering {
    let key = |score: f32| if score.is_nan() { f32::NEG_INFINITY } else { score };
    key(b).total_cmp(&key(a))
}
