//! Normalization of raw OSM `opening_hours` values into display entries.
//!
//! Supported subset (clauses split on `;`):
//! - explicit day selectors: single day (`sa`), comma list (`mo,we,fr`), or
//!   range (`mo-fr`), using two-letter abbreviations, `ph` for holidays
//! - bare single time ranges (`08:00-20:00`) as a gap-filling default
//! - whole-string sentinels: `24/7`, `closed`/`off`, `unknown`/empty
//!
//! Anything else (seasonal dates, comments, `+` modifiers, week selectors) is
//! not recognized; unaddressed days keep the "Closed" default. Time-range
//! text is opaque: it is displayed as written, never parsed into clock
//! values.

use crate::diagnostics;
use crate::hours::day::{Day, WEEK};
use crate::hours::entry::DayHours;
use crate::hours::merge::merge_week;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::panic;

/// Hours label for days no clause addressed.
pub const CLOSED: &str = "Closed";
/// Hours label for an absent, empty, or `unknown` raw value.
pub const UNKNOWN: &str = "Unknown";

// Capture: 1) day-selector token (letters, comma, hyphen)  2) times text.
const DAY_CLAUSE_RE: &str = r"^([a-zA-Z,-]+)\s+(.+)$";
// Exactly one H:MM/HH:MM time pair and nothing else. A bare clause with two
// comma-separated ranges fails this on purpose and is dropped.
const BARE_TIME_RE: &str = r"^\d{1,2}:\d{2}-\d{1,2}:\d{2}$";

/// Normalize a raw `opening_hours` value into ordered display entries.
///
/// Always returns at least one entry and never fails the caller: whole-string
/// sentinels short-circuit, unrecognized clauses degrade to "Closed" defaults,
/// and any internal failure falls back to showing the raw text unmodified.
pub fn normalize_opening_hours(raw: Option<&str>) -> Vec<DayHours> {
    let Some(raw) = raw else {
        return vec![DayHours::new("", UNKNOWN)];
    };

    // Whole-string sentinels bypass the weekly table entirely.
    let folded = raw.trim().to_lowercase();
    if folded.is_empty() || folded == "unknown" {
        return vec![DayHours::new("", UNKNOWN)];
    }
    if folded == "24/7" {
        return vec![DayHours::new("All Days", "24/7")];
    }
    if folded == "closed" || folded == "off" {
        return vec![DayHours::new("Status", CLOSED)];
    }

    match panic::catch_unwind(|| build_entries(raw)) {
        Ok(Ok(entries)) => entries,
        Ok(Err(err)) => {
            diagnostics::warn(format!(
                "cannot normalize opening hours {:?}: {}",
                raw, err
            ));
            vec![DayHours::new("", raw)]
        }
        Err(_) => {
            diagnostics::warn(format!("panic while normalizing opening hours {:?}", raw));
            vec![DayHours::new("", raw)]
        }
    }
}

/// One semicolon-separated segment after classification.
enum Clause {
    /// Explicit day selector: resolved days (possibly empty) + times text.
    Days(Vec<Day>, String),
    /// Bare single time range, applied to still-untouched days.
    Fill(String),
    /// Unsupported syntax; contributes nothing.
    Skip,
}

fn build_entries(raw: &str) -> anyhow::Result<Vec<DayHours>> {
    let day_clause_re = Regex::new(DAY_CLAUSE_RE)?;
    let bare_time_re = Regex::new(BARE_TIME_RE)?;

    let clauses: Vec<Clause> = raw
        .split(';')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(|clause| classify_clause(clause, &day_clause_re, &bare_time_re))
        .collect();

    // Weekly table: every calendar day plus Public Holiday starts "Closed".
    let mut table: BTreeMap<Day, String> = BTreeMap::new();
    for day in WEEK {
        table.insert(day, CLOSED.to_string());
    }
    table.insert(Day::PublicHoliday, CLOSED.to_string());
    let mut touched: BTreeSet<Day> = BTreeSet::new();

    // Pass 1: explicit-day clauses in input order; a later clause wins for
    // the days it addresses.
    for clause in &clauses {
        if let Clause::Days(days, times) = clause {
            for day in days {
                table.insert(*day, times.clone());
                touched.insert(*day);
            }
        }
    }

    // Pass 2: bare time ranges fill the gaps. A bare clause never overwrites
    // a day an explicit clause set, regardless of where it appeared in the
    // input.
    for clause in &clauses {
        if let Clause::Fill(times) = clause {
            for day in WEEK.iter().copied().chain([Day::PublicHoliday]) {
                if touched.insert(day) {
                    table.insert(day, times.clone());
                }
            }
        }
    }

    // Calendar days first, merged into runs; the Public Holiday entry is
    // appended on its own, and only when the input addressed it with a label
    // other than the default.
    let mut entries = merge_week(&table);
    let ph = &table[&Day::PublicHoliday];
    if raw.to_lowercase().contains("ph") && ph != CLOSED {
        entries.push(DayHours::new(Day::PublicHoliday.name(), ph.clone()));
    }

    Ok(entries)
}

fn classify_clause(clause: &str, day_clause_re: &Regex, bare_time_re: &Regex) -> Clause {
    if let Some(caps) = day_clause_re.captures(clause) {
        let selector = caps[1].to_lowercase();
        return Clause::Days(resolve_selector(&selector), caps[2].to_string());
    }
    if bare_time_re.is_match(clause) {
        return Clause::Fill(clause.to_string());
    }
    Clause::Skip
}

/// Expand a day-selector token into calendar days.
///
/// Ranges need exactly two known calendar-day endpoints; `ph` is not a valid
/// endpoint and a descending range matches nothing. Comma lists drop unknown
/// abbreviations instead of failing.
fn resolve_selector(selector: &str) -> Vec<Day> {
    if selector.contains('-') {
        let parts: Vec<&str> = selector.split('-').collect();
        if parts.len() != 2 {
            return Vec::new();
        }
        let start = Day::from_abbrev(parts[0].trim());
        let end = Day::from_abbrev(parts[1].trim());
        let (Some(start), Some(end)) = (start, end) else {
            return Vec::new();
        };
        match (start.weekday_index(), end.weekday_index()) {
            (Some(si), Some(ei)) => (si..=ei).map(|i| WEEK[i]).collect(),
            _ => Vec::new(),
        }
    } else {
        selector
            .split(',')
            .filter_map(|abbr| Day::from_abbrev(abbr.trim()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_opening_hours;
    use crate::hours::entry::DayHours;
    use pretty_assertions::assert_eq;

    fn norm(raw: &str) -> Vec<DayHours> {
        normalize_opening_hours(Some(raw))
    }

    fn entry(day: &str, hours: &str) -> DayHours {
        DayHours::new(day, hours)
    }

    #[test]
    fn absent_empty_and_unknown_yield_unknown() {
        let want = vec![entry("", "Unknown")];
        assert_eq!(normalize_opening_hours(None), want);
        assert_eq!(norm(""), want);
        assert_eq!(norm("   "), want);
        assert_eq!(norm("unknown"), want);
        assert_eq!(norm("Unknown"), want);
    }

    #[test]
    fn twenty_four_seven_sentinel() {
        let want = vec![entry("All Days", "24/7")];
        assert_eq!(norm("24/7"), want);
        assert_eq!(norm("  24/7  "), want);
    }

    #[test]
    fn closed_and_off_sentinels() {
        let want = vec![entry("Status", "Closed")];
        assert_eq!(norm("closed"), want);
        assert_eq!(norm("Closed"), want);
        assert_eq!(norm("off"), want);
        assert_eq!(norm("OFF"), want);
    }

    #[test]
    fn weekday_range_merges_and_rest_stays_closed() {
        assert_eq!(
            norm("mo-fr 09:00-17:00"),
            vec![
                entry("Monday - Friday", "09:00-17:00"),
                entry("Saturday - Sunday", "Closed"),
            ]
        );
    }

    #[test]
    fn day_abbreviations_are_case_insensitive() {
        assert_eq!(norm("Mo-Fr 09:00-17:00"), norm("mo-fr 09:00-17:00"));
        assert_eq!(norm("SA,SU 10:00-14:00"), norm("sa,su 10:00-14:00"));
    }

    #[test]
    fn later_clause_wins_for_overlapping_day() {
        assert_eq!(
            norm("mo-fr 09:00-17:00; we 12:00-15:00"),
            vec![
                entry("Monday - Tuesday", "09:00-17:00"),
                entry("Wednesday", "12:00-15:00"),
                entry("Thursday - Friday", "09:00-17:00"),
                entry("Saturday - Sunday", "Closed"),
            ]
        );
    }

    #[test]
    fn comma_list_resolves_each_day() {
        assert_eq!(
            norm("sa,su 10:00-14:00"),
            vec![
                entry("Monday - Friday", "Closed"),
                entry("Saturday - Sunday", "10:00-14:00"),
            ]
        );
    }

    #[test]
    fn unknown_pieces_in_comma_list_are_ignored() {
        assert_eq!(
            norm("mo,xx 09:00-17:00"),
            vec![
                entry("Monday", "09:00-17:00"),
                entry("Tuesday - Sunday", "Closed"),
            ]
        );
    }

    #[test]
    fn bare_time_range_fills_the_whole_week() {
        assert_eq!(
            norm("08:00-20:00"),
            vec![entry("Monday - Sunday", "08:00-20:00")]
        );
    }

    #[test]
    fn bare_clause_only_fills_untouched_days() {
        assert_eq!(
            norm("mo-fr 09:00-17:00; 08:00-20:00"),
            vec![
                entry("Monday - Friday", "09:00-17:00"),
                entry("Saturday - Sunday", "08:00-20:00"),
            ]
        );
    }

    #[test]
    fn bare_clause_loses_to_explicit_days_even_when_listed_first() {
        assert_eq!(
            norm("10:00-14:00; sa,su 12:00-20:00"),
            vec![
                entry("Monday - Friday", "10:00-14:00"),
                entry("Saturday - Sunday", "12:00-20:00"),
            ]
        );
    }

    #[test]
    fn second_bare_clause_finds_no_gaps_left() {
        assert_eq!(
            norm("08:00-12:00; 13:00-17:00"),
            vec![entry("Monday - Sunday", "08:00-12:00")]
        );
    }

    #[test]
    fn multi_range_bare_clause_is_dropped() {
        assert_eq!(
            norm("mo 09:00-12:00; 08:00-12:00,13:00-17:00"),
            vec![
                entry("Monday", "09:00-12:00"),
                entry("Tuesday - Sunday", "Closed"),
            ]
        );
    }

    #[test]
    fn malformed_range_is_a_noop() {
        assert_eq!(
            norm("xx-yy 09:00-17:00"),
            vec![entry("Monday - Sunday", "Closed")]
        );
    }

    #[test]
    fn descending_range_matches_nothing() {
        assert_eq!(
            norm("fr-mo 09:00-17:00"),
            vec![entry("Monday - Sunday", "Closed")]
        );
    }

    #[test]
    fn public_holiday_is_not_a_range_endpoint() {
        assert_eq!(
            norm("sa-ph 10:00-12:00"),
            vec![entry("Monday - Sunday", "Closed")]
        );
    }

    #[test]
    fn three_part_range_matches_nothing() {
        assert_eq!(
            norm("mo-we-fr 09:00-17:00"),
            vec![entry("Monday - Sunday", "Closed")]
        );
    }

    #[test]
    fn unsupported_syntax_degrades_to_closed() {
        assert_eq!(norm("banana"), vec![entry("Monday - Sunday", "Closed")]);
    }

    #[test]
    fn public_holiday_entry_is_appended_last() {
        assert_eq!(
            norm("mo-fr 09:00-17:00; ph 10:00-12:00"),
            vec![
                entry("Monday - Friday", "09:00-17:00"),
                entry("Saturday - Sunday", "Closed"),
                entry("Public Holiday", "10:00-12:00"),
            ]
        );
    }

    #[test]
    fn public_holiday_off_is_kept_as_written() {
        // "off" is opaque times text here, not the whole-string sentinel.
        assert_eq!(
            norm("mo-fr 09:00-17:00; ph off"),
            vec![
                entry("Monday - Friday", "09:00-17:00"),
                entry("Saturday - Sunday", "Closed"),
                entry("Public Holiday", "off"),
            ]
        );
    }

    #[test]
    fn public_holiday_resolving_to_default_is_suppressed() {
        assert_eq!(
            norm("mo-fr 09:00-17:00; ph Closed"),
            vec![
                entry("Monday - Friday", "09:00-17:00"),
                entry("Saturday - Sunday", "Closed"),
            ]
        );
    }

    #[test]
    fn bare_fill_does_not_surface_public_holiday() {
        // The fill touches the holiday slot, but nothing in the input says
        // "ph", so no holiday entry is shown.
        assert_eq!(
            norm("08:00-20:00"),
            vec![entry("Monday - Sunday", "08:00-20:00")]
        );
    }

    #[test]
    fn public_holiday_never_merges_with_sunday() {
        assert_eq!(
            norm("mo-su 10:00-18:00; ph 10:00-18:00"),
            vec![
                entry("Monday - Sunday", "10:00-18:00"),
                entry("Public Holiday", "10:00-18:00"),
            ]
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = "mo-fr 09:00-17:00; sa 10:00-14:00; ph off";
        assert_eq!(norm(raw), norm(raw));
    }

    #[test]
    fn empty_clauses_are_dropped() {
        assert_eq!(
            norm("; mo 09:00-17:00 ;;"),
            vec![
                entry("Monday", "09:00-17:00"),
                entry("Tuesday - Sunday", "Closed"),
            ]
        );
    }
}
