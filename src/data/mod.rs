/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///    points.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  check header, deserialize rows → ComparisonDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────┐
///   │ ComparisonDataset │  Vec<Sample> in file row order
///   └───────────────────┘
/// ```

pub mod loader;
pub mod model;
