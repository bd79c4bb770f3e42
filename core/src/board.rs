use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::*;

/// A player's full set of challenges, keyed by cell identifier such as `"1x1"`.
///
/// Iteration runs in ascending key order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: BTreeMap<String, Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cell_key: impl Into<String>, cell: Cell) -> Option<Cell> {
        self.cells.insert(cell_key.into(), cell)
    }

    pub fn get(&self, cell_key: &str) -> Option<&Cell> {
        self.cells.get(cell_key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Cell> {
        self.cells.iter()
    }

    pub fn completed_count(&self) -> usize {
        self.cells.values().filter(|cell| cell.done).count()
    }

    /// Mean cell difficulty rounded half away from zero; 0 for an empty board.
    pub fn average_difficulty(&self) -> i64 {
        if self.cells.is_empty() {
            return 0;
        }

        let total: f64 = self.cells.values().map(|cell| cell.difficulty.value()).sum();
        let mean = (total / self.cells.len() as f64).round();
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
        if !(i64::MIN as f64..i64::MAX as f64).contains(&mean) {
            log::debug!("Mean difficulty {mean} over {} cells is out of range", self.cells.len());
            return 0;
        }

        mean as i64
    }
}

/// Average difficulty of a possibly missing board.
pub fn average_difficulty(board: Option<&Board>) -> i64 {
    board.map_or(0, Board::average_difficulty)
}

impl<K: Into<String>> FromIterator<(K, Cell)> for Board {
    fn from_iter<I: IntoIterator<Item = (K, Cell)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(cell_key, cell)| (cell_key.into(), cell))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = (&'a String, &'a Cell);
    type IntoIter = btree_map::Iter<'a, String, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
