use crate::engine::level_table::LevelTable;

pub struct CharFilter {
    pub allowed: Vec<char>,
}

impl CharFilter {
    pub fn new(allowed: Vec<char>) -> Self {
        Self { allowed }
    }

    /// Characters unlocked at `level`. Empty when the level is outside the table.
    pub fn for_level(table: &LevelTable, level: i64) -> Self {
        Self::new(table.cumulative_set(level).chars().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_level_matches_cumulative_set() {
        let table = LevelTable::hebrew();
        let filter = CharFilter::for_level(&table, 1);
        assert_eq!(filter.allowed, vec!['ח', 'כ', 'ל', 'ג']);
    }

    #[test]
    fn test_filter_out_of_range_is_empty() {
        let table = LevelTable::hebrew();
        assert!(CharFilter::for_level(&table, -1).is_empty());
        assert!(CharFilter::for_level(&table, 99).is_empty());
    }
}
