//! Run-length merging of consecutive days sharing identical hours text.

use crate::hours::day::{Day, WEEK};
use crate::hours::entry::DayHours;
use std::collections::BTreeMap;

/// Collapse the seven calendar days into display entries, one per maximal run
/// of consecutive days with byte-identical hours text.
///
/// Walks [`WEEK`] only; the Public Holiday pseudo-day never joins a run. The
/// table must carry an entry for every calendar day.
pub fn merge_week(table: &BTreeMap<Day, String>) -> Vec<DayHours> {
    let mut out = Vec::new();

    let mut i = 0;
    while i < WEEK.len() {
        let hours = &table[&WEEK[i]];

        // Extend the run while the next day shows the same text.
        let mut end = i;
        while end + 1 < WEEK.len() && &table[&WEEK[end + 1]] == hours {
            end += 1;
        }

        let day = if end > i {
            format!("{} - {}", WEEK[i].name(), WEEK[end].name())
        } else {
            WEEK[i].name().to_string()
        };
        out.push(DayHours::new(day, hours.clone()));

        i = end + 1;
    }

    out
}
