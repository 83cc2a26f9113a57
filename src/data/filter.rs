use std::collections::BTreeMap;

use super::model::{Category, Dataset, Row};

// ---------------------------------------------------------------------------
// Partitioning by label
// ---------------------------------------------------------------------------

/// Category → rows carrying that category's label, in file order.
pub type Partition = BTreeMap<Category, Vec<Row>>;

/// Return the rows whose label equals `label` exactly (no tolerance).
pub fn rows_with_label(dataset: &Dataset, label: f64) -> Vec<Row> {
    dataset
        .rows()
        .iter()
        .filter(|row| row.label == label)
        .copied()
        .collect()
}

/// Split the dataset into one subset per [`Category`].
///
/// Every category gets an entry, possibly empty. Rows whose label is not one
/// of the categories land in no subset.
pub fn partition(dataset: &Dataset) -> Partition {
    Category::ALL
        .into_iter()
        .map(|category| (category, rows_with_label(dataset, category.label())))
        .collect()
}

/// Number of rows that no category claims.
pub fn unclassified_count(dataset: &Dataset) -> usize {
    dataset
        .rows()
        .iter()
        .filter(|row| Category::from_label(row.label).is_none())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[[f64; 3]]) -> Dataset {
        Dataset::from_rows(rows.iter().copied().map(Row::from).collect())
    }

    #[test]
    fn splits_rows_by_label() {
        let ds = dataset(&[[0.0, 0.0, 1.0], [1.0, 1.0, 2.0], [2.0, 2.0, 3.0], [3.0, 3.0, 1.0]]);
        let parts = partition(&ds);

        assert_eq!(
            parts[&Category::One],
            vec![Row::new(0.0, 0.0, 1.0), Row::new(3.0, 3.0, 1.0)]
        );
        assert_eq!(parts[&Category::Two], vec![Row::new(1.0, 1.0, 2.0)]);
        assert_eq!(parts[&Category::Three], vec![Row::new(2.0, 2.0, 3.0)]);
    }

    #[test]
    fn union_covers_exactly_the_known_labels() {
        let ds = dataset(&[
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 4.0],
            [2.0, 0.0, 2.0],
            [3.0, 0.0, 0.0],
            [4.0, 0.0, 1.000001],
            [5.0, 0.0, 3.0],
            [6.0, 0.0, -1.0],
        ]);
        let parts = partition(&ds);

        let mut union: Vec<Row> = parts.values().flatten().copied().collect();
        union.sort_by(|a, b| a.x.total_cmp(&b.x));
        let expected: Vec<Row> = ds
            .rows()
            .iter()
            .filter(|r| [1.0, 2.0, 3.0].contains(&r.label))
            .copied()
            .collect();

        assert_eq!(union, expected);
        assert_eq!(unclassified_count(&ds), 4);
    }

    #[test]
    fn partition_is_idempotent() {
        let ds = dataset(&[[0.5, 1.5, 2.0], [2.5, 3.5, 1.0], [4.5, 5.5, 2.0]]);
        assert_eq!(partition(&ds), partition(&ds));
    }

    #[test]
    fn missing_label_gives_empty_subset() {
        let ds = dataset(&[[0.0, 0.0, 1.0], [1.0, 1.0, 1.0]]);
        let parts = partition(&ds);

        assert_eq!(parts.len(), 3);
        assert!(parts[&Category::Two].is_empty());
        assert!(parts[&Category::Three].is_empty());
    }

    #[test]
    fn empty_dataset_partitions_to_empty_subsets() {
        let parts = partition(&Dataset::default());
        assert!(parts.values().all(Vec::is_empty));
    }
}
