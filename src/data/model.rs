// ---------------------------------------------------------------------------
// Sample – one row of points.csv
// ---------------------------------------------------------------------------

/// A single comparison point: network output and target at the same `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub net: f64,
    pub target: f64,
}

// ---------------------------------------------------------------------------
// ComparisonDataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All samples in file row order. Rows are never sorted or merged, so
/// unordered or duplicate `x` values are kept exactly as written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonDataset {
    samples: Vec<Sample>,
}

impl ComparisonDataset {
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        ComparisonDataset { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(x, net)` pairs in row order.
    pub fn net_points(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(|s| [s.x, s.net]).collect()
    }

    /// `(x, target)` pairs in row order.
    pub fn target_points(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(|s| [s.x, s.target]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_follow_row_order_without_sorting() {
        let ds = ComparisonDataset::from_samples(vec![
            Sample {
                x: 2.0,
                net: 2.1,
                target: 2.0,
            },
            Sample {
                x: 0.0,
                net: 0.1,
                target: 0.0,
            },
            Sample {
                x: 2.0,
                net: 1.9,
                target: 2.0,
            },
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.net_points(), vec![[2.0, 2.1], [0.0, 0.1], [2.0, 1.9]]);
        assert_eq!(ds.target_points(), vec![[2.0, 2.0], [0.0, 0.0], [2.0, 2.0]]);
    }

    #[test]
    fn empty_dataset_has_no_points() {
        let ds = ComparisonDataset::default();
        assert!(ds.is_empty());
        assert!(ds.net_points().is_empty());
        assert!(ds.target_points().is_empty());
    }
}
