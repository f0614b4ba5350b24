use common::{ScoringMode, UserId};
use serde::Serialize;
use utoipa::ToSchema;

use crate::table::ScoreboardTable;

/// Per-user totals of a scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct StandingsRow {
    pub user_id: UserId,
    /// 1-based; tied rows share a place.
    pub place: usize,
    pub solved: u32,
    /// Sum of marks under IOI, `solved` otherwise.
    pub score: i64,
    /// Seconds, including the wrong-try penalty. Always 0 under IOI.
    pub penalty: i64,
}

impl StandingsRow {
    fn rank_key(&self) -> (i64, i64) {
        (-self.score, self.penalty)
    }
}

/// Sum up every row of `table` and rank the users.
pub fn compute(table: &ScoreboardTable, mode: ScoringMode) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = table
        .rows()
        .map(|(user_id, cells)| {
            let solved = cells.values().filter(|cell| cell.success).count() as u32;
            let (score, penalty) = if mode.is_acm_like() {
                let penalty: i64 = cells.values().map(|cell| cell.penalty_time()).sum();
                (i64::from(solved), penalty)
            } else {
                // Blank marks count as zero.
                let score: i64 = cells
                    .values()
                    .filter_map(|cell| cell.mark.parse::<i64>().ok())
                    .sum();
                (score, 0)
            };
            StandingsRow {
                user_id,
                place: 0,
                solved,
                score,
                penalty,
            }
        })
        .collect();

    // Stable: ties keep table order.
    rows.sort_by_key(StandingsRow::rank_key);

    let mut place = 0;
    let mut previous = None;
    for (i, row) in rows.iter_mut().enumerate() {
        let key = row.rank_key();
        if previous != Some(key) {
            place = i + 1;
            previous = Some(key);
        }
        row.place = place;
    }
    rows
}
