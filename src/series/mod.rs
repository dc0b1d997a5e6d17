// src/series/mod.rs

use crate::ingest::{CensusRecord, DailyRecord};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

/// A daily record with its derived columns: the per-day total and the
/// running totals up to and including that day.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct DailyTotals {
    pub date: String,
    pub attacks: u32,
    pub deaths: u32,
    pub total: u32,
    pub cumulative_attacks: u32,
    pub cumulative_deaths: u32,
}

/// Inclusive prefix sums over the attack and death columns, in input order.
/// cumulative[0] = v[0]; cumulative[i] = cumulative[i-1] + v[i].
pub fn running_totals(rows: &[DailyRecord]) -> Vec<DailyTotals> {
    let mut out = Vec::with_capacity(rows.len());
    let mut attacks_so_far = 0u32;
    let mut deaths_so_far = 0u32;
    for row in rows {
        attacks_so_far += row.attacks;
        deaths_so_far += row.deaths;
        out.push(DailyTotals {
            date: row.date.clone(),
            attacks: row.attacks,
            deaths: row.deaths,
            total: row.attacks + row.deaths,
            cumulative_attacks: attacks_so_far,
            cumulative_deaths: deaths_so_far,
        });
    }
    out
}

/// Stable sort into calendar order, keyed on the parsed date label.
///
/// The source files are expected to already be chronological, but nothing
/// guarantees it. If every label parses, the rows are sorted; if any label
/// does not, the file order is kept unchanged and a warning is logged, so
/// an unexpected date format degrades to the old trust-the-file behavior.
pub fn sort_chronologically(rows: &mut [DailyRecord]) {
    let mut keys = Vec::with_capacity(rows.len());
    for row in rows.iter() {
        match parse_date_label(&row.date) {
            Some(date) => keys.push(date),
            None => {
                warn!(label = %row.date, "unparseable date label; keeping file order");
                return;
            }
        }
    }

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by_key(|&i| keys[i]);
    if order.iter().enumerate().any(|(pos, &i)| pos != i) {
        warn!("daily records were not in calendar order; sorted");
        let sorted: Vec<DailyRecord> = order.iter().map(|&i| rows[i].clone()).collect();
        rows.clone_from_slice(&sorted);
    }
}

/// Parse a daily date label like `"19-Aug-1854"`. A couple of variants
/// seen in hand-maintained copies of the dataset are accepted too.
pub fn parse_date_label(s: &str) -> Option<NaiveDate> {
    const FORMATS: &[&str] = &["%d-%b-%Y", "%b %d, %Y", "%d %b %Y", "%Y-%m-%d"];
    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Male and female population sums over the whole census table.
pub fn census_totals(rows: &[CensusRecord]) -> (u64, u64) {
    let male = rows.iter().map(|r| r.male).sum();
    let female = rows.iter().map(|r| r.female).sum();
    (male, female)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily(date: &str, attacks: u32, deaths: u32) -> DailyRecord {
        DailyRecord {
            date: date.to_string(),
            attacks,
            deaths,
        }
    }

    #[test]
    fn cumulative_deaths_match_worked_example() {
        let rows = vec![
            daily("19-Aug-1854", 0, 1),
            daily("20-Aug-1854", 0, 2),
            daily("21-Aug-1854", 0, 0),
            daily("22-Aug-1854", 0, 3),
        ];
        let totals = running_totals(&rows);
        let cumulative: Vec<u32> = totals.iter().map(|t| t.cumulative_deaths).collect();
        assert_eq!(cumulative, vec![1, 3, 3, 6]);
    }

    #[test]
    fn all_zero_attacks_stay_zero() {
        let rows = vec![
            daily("19-Aug-1854", 0, 0),
            daily("20-Aug-1854", 0, 0),
            daily("21-Aug-1854", 0, 0),
        ];
        let totals = running_totals(&rows);
        assert!(totals.iter().all(|t| t.cumulative_attacks == 0));
    }

    #[test]
    fn single_row_is_its_own_cumulative() {
        let totals = running_totals(&[daily("19-Aug-1854", 4, 2)]);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].cumulative_attacks, 4);
        assert_eq!(totals[0].cumulative_deaths, 2);
        assert_eq!(totals[0].total, 6);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let rows = vec![daily("19-Aug-1854", 3, 1), daily("20-Aug-1854", 5, 2)];
        assert_eq!(running_totals(&rows), running_totals(&rows));
    }

    #[test]
    fn length_and_recurrence_hold() {
        let rows: Vec<DailyRecord> = (0..10)
            .map(|i| daily(&format!("{}-Sep-1854", i + 1), i, 2 * i))
            .collect();
        let totals = running_totals(&rows);
        assert_eq!(totals.len(), rows.len());
        for i in 1..totals.len() {
            assert_eq!(
                totals[i].cumulative_attacks,
                totals[i - 1].cumulative_attacks + rows[i].attacks
            );
            assert_eq!(
                totals[i].cumulative_deaths,
                totals[i - 1].cumulative_deaths + rows[i].deaths
            );
        }
    }

    #[test]
    fn sorts_shuffled_dates() {
        let mut rows = vec![
            daily("1-Sep-1854", 143, 70),
            daily("19-Aug-1854", 1, 1),
            daily("31-Aug-1854", 56, 4),
        ];
        sort_chronologically(&mut rows);
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["19-Aug-1854", "31-Aug-1854", "1-Sep-1854"]);
    }

    #[test]
    fn sort_is_stable_for_equal_dates() {
        let mut rows = vec![
            daily("19-Aug-1854", 1, 0),
            daily("19-Aug-1854", 2, 0),
            daily("18-Aug-1854", 3, 0),
        ];
        sort_chronologically(&mut rows);
        assert_eq!(rows[0].attacks, 3);
        assert_eq!(rows[1].attacks, 1);
        assert_eq!(rows[2].attacks, 2);
    }

    #[test]
    fn unparseable_label_keeps_file_order() {
        let mut rows = vec![
            daily("1-Sep-1854", 1, 0),
            daily("someday", 2, 0),
            daily("19-Aug-1854", 3, 0),
        ];
        sort_chronologically(&mut rows);
        let attacks: Vec<u32> = rows.iter().map(|r| r.attacks).collect();
        assert_eq!(attacks, vec![1, 2, 3]);
    }

    #[test]
    fn parses_expected_label_formats() {
        let expected = NaiveDate::from_ymd_opt(1854, 8, 19).unwrap();
        assert_eq!(parse_date_label("19-Aug-1854"), Some(expected));
        assert_eq!(parse_date_label("Aug 19, 1854"), Some(expected));
        assert_eq!(parse_date_label(" 1854-08-19 "), Some(expected));
        assert_eq!(parse_date_label("the 19th"), None);
    }

    #[test]
    fn census_totals_sum_both_columns() {
        let rows = vec![
            CensusRecord {
                age: "0-9".to_string(),
                male: 100,
                female: 120,
            },
            CensusRecord {
                age: "10-19".to_string(),
                male: 80,
                female: 90,
            },
        ];
        assert_eq!(census_totals(&rows), (180, 210));
    }
}
