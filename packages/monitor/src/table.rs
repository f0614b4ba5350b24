use common::{ProblemId, UserId};
use serde::Serialize;

use crate::cell::Cell;
use crate::ordered::OrderedMap;

pub type Row = OrderedMap<ProblemId, Cell>;

/// Scoreboard: user -> problem -> cell.
///
/// Users keep first-appearance order, problems keep the order they were added in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreboardTable {
    rows: OrderedMap<UserId, Row>,
}

impl ScoreboardTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with a no-attempt cell for every `users` x `problems` pair.
    pub fn seeded(users: &[UserId], problems: &[ProblemId]) -> Self {
        let mut table = Self::new();
        for &user_id in users {
            let row = table.rows.get_or_insert_with(user_id, Row::new);
            for &problem_id in problems {
                row.insert(problem_id, Cell::no_attempt());
            }
        }
        table
    }

    pub fn insert(&mut self, user_id: UserId, problem_id: ProblemId, cell: Cell) {
        self.rows
            .get_or_insert_with(user_id, Row::new)
            .insert(problem_id, cell);
    }

    /// Overlay every cell of `other`, adding rows and columns it introduces.
    pub fn merge(&mut self, other: ScoreboardTable) {
        for (user_id, row) in other.rows {
            for (problem_id, cell) in row {
                self.insert(user_id, problem_id, cell);
            }
        }
    }

    pub fn get(&self, user_id: UserId, problem_id: ProblemId) -> Option<&Cell> {
        self.rows.get(&user_id)?.get(&problem_id)
    }

    pub fn row(&self, user_id: UserId) -> Option<&Row> {
        self.rows.get(&user_id)
    }

    pub fn users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.rows.keys().copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = (UserId, &Row)> {
        self.rows.iter().map(|(&user_id, row)| (user_id, row))
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.values().map(OrderedMap::len).sum()
    }
}
