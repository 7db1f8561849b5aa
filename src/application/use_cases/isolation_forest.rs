// ============================================================
// ISOLATION FOREST
// ============================================================
// Ensemble outlier scorer that isolates points via random
// axis-aligned partitioning. Seeded for reproducible runs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const TREE_COUNT: usize = 100;
const MAX_SUBSAMPLE: usize = 256;

/// Euler-Mascheroni constant, used in the expected path length
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

enum Node {
    Leaf {
        size: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// A fitted forest of random isolation trees
pub struct IsolationForest {
    trees: Vec<Node>,
    subsample: usize,
}

impl IsolationForest {
    /// Fit the forest on a row-major numeric matrix.
    /// The seed fully determines the trees.
    pub fn fit(data: &[Vec<f64>], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let subsample = data.len().min(MAX_SUBSAMPLE).max(1);
        let height_limit = (subsample as f64).log2().ceil().max(1.0) as usize;

        let mut indices: Vec<usize> = (0..data.len()).collect();
        let mut trees = Vec::with_capacity(TREE_COUNT);
        for _ in 0..TREE_COUNT {
            indices.shuffle(&mut rng);
            trees.push(build_tree(data, &indices[..subsample], 0, height_limit, &mut rng));
        }

        Self { trees, subsample }
    }

    /// Anomaly score per row in (0, 1); higher means more isolated.
    /// Scores near 0.5 are typical inliers.
    pub fn anomaly_scores(&self, data: &[Vec<f64>]) -> Vec<f64> {
        let norm = expected_path_length(self.subsample).max(f64::MIN_POSITIVE);
        data.iter()
            .map(|row| {
                let total: f64 = self
                    .trees
                    .iter()
                    .map(|tree| path_length(tree, row, 0.0))
                    .sum();
                let average = total / self.trees.len() as f64;
                2.0_f64.powf(-average / norm)
            })
            .collect()
    }
}

fn build_tree(
    data: &[Vec<f64>],
    sample: &[usize],
    depth: usize,
    height_limit: usize,
    rng: &mut StdRng,
) -> Node {
    if depth >= height_limit || sample.len() <= 1 {
        return Node::Leaf { size: sample.len() };
    }

    let feature_count = data[sample[0]].len();
    let splittable: Vec<(usize, f64, f64)> = (0..feature_count)
        .filter_map(|feature| {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for &row in sample {
                let value = data[row][feature];
                min = min.min(value);
                max = max.max(value);
            }
            (max > min).then_some((feature, min, max))
        })
        .collect();

    // All remaining points are identical, nothing left to isolate
    let Some(&(feature, min, max)) = splittable.choose(rng) else {
        return Node::Leaf { size: sample.len() };
    };

    let threshold = rng.gen_range(min..max);
    let (left, right): (Vec<usize>, Vec<usize>) = sample
        .iter()
        .copied()
        .partition(|&row| data[row][feature] < threshold);

    Node::Split {
        feature,
        threshold,
        left: Box::new(build_tree(data, &left, depth + 1, height_limit, rng)),
        right: Box::new(build_tree(data, &right, depth + 1, height_limit, rng)),
    }
}

fn path_length(node: &Node, row: &[f64], depth: f64) -> f64 {
    match node {
        Node::Leaf { size } => depth + expected_path_length(*size),
        Node::Split {
            feature,
            threshold,
            left,
            right,
        } => {
            let value = row.get(*feature).copied().unwrap_or(0.0);
            if value < *threshold {
                path_length(left, row, depth + 1.0)
            } else {
                path_length(right, row, depth + 1.0)
            }
        }
    }
}

/// Expected path length of an unsuccessful BST search over n points
fn expected_path_length(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let n = n as f64;
    2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster_with_outlier() -> Vec<Vec<f64>> {
        let mut data: Vec<Vec<f64>> = (0..40)
            .map(|i| vec![10.0 + (i % 5) as f64 * 0.1, 20.0 + (i % 3) as f64 * 0.1])
            .collect();
        data.push(vec![500.0, -500.0]);
        data
    }

    #[test]
    fn test_outlier_scores_highest() {
        let data = cluster_with_outlier();
        let forest = IsolationForest::fit(&data, 42);
        let scores = forest.anomaly_scores(&data);

        let outlier_index = data.len() - 1;
        let max_index = scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(max_index, outlier_index);
    }

    #[test]
    fn test_same_seed_same_scores() {
        let data = cluster_with_outlier();
        let first = IsolationForest::fit(&data, 42).anomaly_scores(&data);
        let second = IsolationForest::fit(&data, 42).anomaly_scores(&data);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scores_are_in_unit_interval() {
        let data = cluster_with_outlier();
        let scores = IsolationForest::fit(&data, 7).anomaly_scores(&data);
        assert!(scores.iter().all(|s| *s > 0.0 && *s < 1.0));
    }

    #[test]
    fn test_identical_points_do_not_panic() {
        let data = vec![vec![1.0, 1.0]; 20];
        let scores = IsolationForest::fit(&data, 42).anomaly_scores(&data);
        assert_eq!(scores.len(), 20);
    }
}
