/// Data layer: core types, loading, partitioning, and export.
///
/// Architecture:
/// ```text
///   combined.txt  (x  y  label, whitespace separated)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse text → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Row>, file order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  label == 1 / 2 / 3 → one subset per Category
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
