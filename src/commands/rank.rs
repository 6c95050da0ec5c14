//! Template ranking
//!
//! Orders templates by how cheaply they produce grids across a batch.

use super::batch::BatchStatistics;
use crate::templates::TemplateLibrary;

/// Added to a template's attempts so rarely tried templates rank low
pub const ATTEMPT_DAMPING: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateRank {
    pub template: usize,
    pub successes: u64,
    pub attempts: u64,
    /// `successes / (attempts + 100)`
    pub score: f64,
}

/// Rank every template in a batch, best first; ties keep library order
#[must_use]
pub fn rank_templates(stats: &BatchStatistics) -> Vec<TemplateRank> {
    let mut ranks: Vec<TemplateRank> = stats
        .template_successes
        .iter()
        .zip(&stats.template_attempts)
        .enumerate()
        .map(|(template, (&successes, &attempts))| TemplateRank {
            template,
            successes,
            attempts,
            score: successes as f64 / (attempts as f64 + ATTEMPT_DAMPING),
        })
        .collect();

    ranks.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranks
}

/// The library reordered by rank
#[must_use]
pub fn ranked_library(library: &TemplateLibrary, ranks: &[TemplateRank]) -> TemplateLibrary {
    let order: Vec<usize> = ranks.iter().map(|r| r.template).collect();
    library.reordered(&order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridTemplate, Slot};

    fn stats(successes: Vec<u64>, attempts: Vec<u64>) -> BatchStatistics {
        BatchStatistics {
            template_successes: successes,
            template_attempts: attempts,
            ..BatchStatistics::default()
        }
    }

    #[test]
    fn score_damps_attempts() {
        let ranks = rank_templates(&stats(vec![10, 2, 0], vec![900, 0, 50]));
        let order: Vec<usize> = ranks.iter().map(|r| r.template).collect();

        // 10/1000 = 0.01, 2/100 = 0.02, 0/150 = 0
        assert_eq!(order, [1, 0, 2]);
        assert!((ranks[0].score - 0.02).abs() < 1e-12);
        assert!((ranks[1].score - 0.01).abs() < 1e-12);
    }

    #[test]
    fn ties_keep_library_order() {
        let ranks = rank_templates(&stats(vec![0, 1, 0, 1], vec![5, 100, 7, 100]));
        let order: Vec<usize> = ranks.iter().map(|r| r.template).collect();
        assert_eq!(order, [1, 3, 0, 2]);
    }

    #[test]
    fn ranked_library_follows_ranks() {
        let library = TemplateLibrary::new(vec![
            GridTemplate::new(vec![Slot::new(3)]).unwrap(),
            GridTemplate::new(vec![Slot::new(4)]).unwrap(),
        ]);
        let ranks = rank_templates(&stats(vec![0, 3], vec![10, 10]));
        let curated = ranked_library(&library, &ranks);
        assert_eq!(curated.get(0), library.get(1));
        assert_eq!(curated.get(1), library.get(0));
    }
}
