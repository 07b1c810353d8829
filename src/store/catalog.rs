use std::collections::HashMap;

use super::SnapshotError;

/// Lookup failures against a catalog
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("'{0}' not found in catalog")]
    NotFound(String),
}

/// Square matrix of pairwise similarity scores, stored row-major
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Builds a matrix from its rows, rejecting anything that is not square
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, SnapshotError> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SnapshotError::Shape(format!(
                    "similarity row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    size
                )));
            }
            scores.extend(row);
        }

        Ok(Self { size, scores })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Scores of `index` against every item, in catalog order
    pub fn row(&self, index: usize) -> &[f32] {
        let start = index * self.size;
        &self.scores[start..start + self.size]
    }
}

/// Immutable catalog of titles aligned with their similarity matrix
///
/// Row and column `i` of the matrix belong to the title at position `i`.
#[derive(Debug, Clone)]
pub struct Catalog {
    titles: Vec<String>,
    positions: HashMap<String, usize>,
    similarity: SimilarityMatrix,
}

impl Catalog {
    pub fn new(titles: Vec<String>, similarity: SimilarityMatrix) -> Result<Self, SnapshotError> {
        if similarity.size() != titles.len() {
            return Err(SnapshotError::Shape(format!(
                "catalog has {} titles but similarity matrix is {}x{}",
                titles.len(),
                similarity.size(),
                similarity.size()
            )));
        }

        // Duplicate titles resolve to their first position
        let mut positions = HashMap::with_capacity(titles.len());
        for (index, title) in titles.iter().enumerate() {
            positions.entry(title.clone()).or_insert(index);
        }

        if positions.len() != titles.len() {
            tracing::warn!(
                titles = titles.len(),
                unique = positions.len(),
                "Catalog contains duplicate titles; first occurrence wins"
            );
        }

        Ok(Self {
            titles,
            positions,
            similarity,
        })
    }

    /// Exact, case-sensitive lookup of a title's position
    pub fn index_of(&self, title: &str) -> Result<usize, CatalogError> {
        self.positions
            .get(title)
            .copied()
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))
    }

    pub fn contains(&self, title: &str) -> bool {
        self.positions.contains_key(title)
    }

    pub fn title_at(&self, index: usize) -> &str {
        &self.titles[index]
    }

    pub fn size(&self) -> usize {
        self.titles.len()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn row(&self, index: usize) -> &[f32] {
        self.similarity.row(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Catalog {
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.9, 0.2],
            vec![0.9, 1.0, 0.4],
            vec![0.2, 0.4, 1.0],
        ])
        .unwrap();
        Catalog::new(vec!["A".into(), "B".into(), "C".into()], matrix).unwrap()
    }

    #[test]
    fn test_index_of_and_title_at() {
        let catalog = abc();
        assert_eq!(catalog.size(), 3);
        assert_eq!(catalog.index_of("B"), Ok(1));
        assert_eq!(catalog.title_at(2), "C");
        assert_eq!(catalog.row(1), &[0.9, 1.0, 0.4]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = abc();
        assert_eq!(
            catalog.index_of("a"),
            Err(CatalogError::NotFound("a".to_string()))
        );
        assert!(!catalog.contains("a"));
        assert!(catalog.contains("A"));
    }

    #[test]
    fn test_duplicate_title_first_wins() {
        let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5, 1.0]]).unwrap();
        let catalog = Catalog::new(vec!["Twin".into(), "Twin".into()], matrix).unwrap();
        assert_eq!(catalog.index_of("Twin"), Ok(0));
    }

    #[test]
    fn test_ragged_matrix_rejected() {
        let result = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5]]);
        assert!(matches!(result, Err(SnapshotError::Shape(_))));
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let matrix = SimilarityMatrix::from_rows(vec![vec![1.0]]).unwrap();
        let result = Catalog::new(vec!["A".into(), "B".into()], matrix);
        assert!(matches!(result, Err(SnapshotError::Shape(_))));
    }
}
