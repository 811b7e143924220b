// src/activity/mod.rs - Sales activity calendar aggregation

//! Turns the sparse per-date sales map from `/seller/SalesMap` into a dense
//! calendar heatmap for one year plus streak statistics.
//!
//! Intensity is normalized per month: the best day of a month is fully
//! saturated within that month, so intensities are not comparable across
//! months. Any day with at least one sale renders at 20% or more.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Sparse mapping from calendar date to sales count for that day.
///
/// Backed by a BTreeMap so iteration order is chronological, which the streak
/// scan relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesActivityMap {
    by_date: BTreeMap<NaiveDate, u32>,
}

/// One day cell in the rendered calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub count: u32,
    /// False for the leading/trailing days that only complete a boundary week
    pub in_year: bool,
}

/// A Sunday-through-Saturday column of the grid
pub type CalendarWeek = [CalendarCell; 7];

/// Summary statistics shown next to the heatmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreakStats {
    /// Consecutive sale days ending at (or the day before) today
    pub current_streak: u32,
    /// Longest run of consecutive sale days anywhere in the map
    pub longest_streak: u32,
    /// Date and count of the single best day
    pub best_day: Option<(NaiveDate, u32)>,
    pub total_sales: u64,
}

impl SalesActivityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from backend wire data, dropping unparseable dates.
    /// Keys are ISO `YYYY-MM-DD` strings.
    pub fn from_wire(raw: &BTreeMap<String, u32>) -> Self {
        let by_date = raw
            .iter()
            .filter_map(|(k, &v)| {
                NaiveDate::parse_from_str(k, "%Y-%m-%d")
                    .ok()
                    .map(|date| (date, v))
            })
            .collect();
        Self { by_date }
    }

    pub fn insert(&mut self, date: NaiveDate, count: u32) {
        self.by_date.insert(date, count);
    }

    pub fn count_on(&self, date: NaiveDate) -> u32 {
        self.by_date.get(&date).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Full calendar grid for one year: consecutive weeks of exactly 7 days,
    /// from the Sunday on/before January 1 through the Saturday on/after
    /// December 31.
    pub fn calendar_grid(&self, year: i32) -> Vec<CalendarWeek> {
        let jan1 = match NaiveDate::from_ymd_opt(year, 1, 1) {
            Some(d) => d,
            None => return Vec::new(),
        };
        let dec31 = match NaiveDate::from_ymd_opt(year, 12, 31) {
            Some(d) => d,
            None => return Vec::new(),
        };

        let start = jan1 - Duration::days(i64::from(jan1.weekday().num_days_from_sunday()));
        let end = dec31 + Duration::days(i64::from(6 - dec31.weekday().num_days_from_sunday()));

        let mut weeks = Vec::new();
        let mut cursor = start;
        while cursor <= end {
            let mut week = [CalendarCell {
                date: cursor,
                count: 0,
                in_year: false,
            }; 7];
            for slot in week.iter_mut() {
                *slot = CalendarCell {
                    date: cursor,
                    count: self.count_on(cursor),
                    in_year: cursor.year() == year,
                };
                cursor += Duration::days(1);
            }
            weeks.push(week);
        }
        weeks
    }

    /// Highest daily count within the month and year of `date`
    pub fn monthly_peak(&self, date: NaiveDate) -> u32 {
        self.by_date
            .iter()
            .filter(|(d, _)| d.year() == date.year() && d.month() == date.month())
            .map(|(_, &count)| count)
            .max()
            .unwrap_or(0)
    }

    /// Display intensity in [0.0, 1.0] for one cell.
    ///
    /// Zero-count days render at 0; any sale day renders at 20% or more; the
    /// monthly peak day renders fully saturated.
    pub fn intensity(&self, cell: &CalendarCell) -> f64 {
        if cell.count == 0 {
            return 0.0;
        }
        let peak = self.monthly_peak(cell.date).max(1);
        (f64::from(cell.count) / f64::from(peak)).max(0.2)
    }

    /// Streak statistics relative to `today`.
    ///
    /// The current streak tolerates a zero "today": when today has no sales
    /// yet but yesterday does, the day is treated as still in progress and the
    /// streak counts from yesterday.
    pub fn streaks(&self, today: NaiveDate) -> StreakStats {
        let mut longest = 0u32;
        let mut run = 0u32;
        let mut prev: Option<NaiveDate> = None;

        for (&date, &count) in &self.by_date {
            if count == 0 {
                continue;
            }
            run = match prev {
                Some(p) if date - p == Duration::days(1) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(date);
        }

        let mut current = 0u32;
        let mut cursor = if self.count_on(today) > 0 {
            today
        } else {
            // A day still in progress: start from yesterday instead.
            today - Duration::days(1)
        };
        while self.count_on(cursor) > 0 {
            current += 1;
            cursor -= Duration::days(1);
        }

        let best_day = self
            .by_date
            .iter()
            .filter(|(_, &count)| count > 0)
            .max_by_key(|(_, &count)| count)
            .map(|(&date, &count)| (date, count));

        let total_sales = self.by_date.values().map(|&c| u64::from(c)).sum();

        StreakStats {
            current_streak: current,
            longest_streak: longest,
            best_day,
            total_sales,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn map_of(entries: &[(&str, u32)]) -> SalesActivityMap {
        let raw: BTreeMap<String, u32> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        SalesActivityMap::from_wire(&raw)
    }

    #[test]
    fn test_grid_completeness() {
        let map = SalesActivityMap::new();
        for year in [2023, 2024, 2025, 2026] {
            let grid = map.calendar_grid(year);
            let first = grid.first().unwrap()[0].date;
            let last = grid.last().unwrap()[6].date;

            // Starts on the Sunday on/before Jan 1 and ends on the Saturday
            // on/after Dec 31.
            assert_eq!(first.weekday().num_days_from_sunday(), 0);
            assert_eq!(last.weekday().num_days_from_sunday(), 6);
            assert!(first <= date(year, 1, 1));
            assert!(date(year, 1, 1) - first < Duration::days(7));
            assert!(last >= date(year, 12, 31));
            assert!(last - date(year, 12, 31) < Duration::days(7));

            // Consecutive days, no gaps.
            let days: Vec<NaiveDate> = grid.iter().flatten().map(|c| c.date).collect();
            for pair in days.windows(2) {
                assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
        }
    }

    #[test]
    fn test_grid_tags_out_of_year_cells() {
        let map = SalesActivityMap::new();
        // Jan 1 2025 is a Wednesday, so the first week holds three days of 2024.
        let grid = map.calendar_grid(2025);
        let first_week = &grid[0];
        assert_eq!(first_week.iter().filter(|c| !c.in_year).count(), 3);
        assert!(first_week[3].in_year);
        assert_eq!(first_week[3].date, date(2025, 1, 1));
    }

    #[test]
    fn test_monthly_intensity_scenario() {
        let map = map_of(&[
            ("2025-03-03", 5),
            ("2025-03-10", 10),
            ("2025-03-21", 2),
        ]);

        let peak_cell = CalendarCell {
            date: date(2025, 3, 10),
            count: 10,
            in_year: true,
        };
        let low_cell = CalendarCell {
            date: date(2025, 3, 21),
            count: 2,
            in_year: true,
        };
        let zero_cell = CalendarCell {
            date: date(2025, 3, 4),
            count: 0,
            in_year: true,
        };

        assert!((map.intensity(&peak_cell) - 1.0).abs() < f64::EPSILON);
        assert!((map.intensity(&low_cell) - 0.2).abs() < f64::EPSILON);
        assert_eq!(map.intensity(&zero_cell), 0.0);
    }

    #[test]
    fn test_intensity_floor() {
        // 1 sale against a peak of 100 still renders at the 20% floor.
        let map = map_of(&[("2025-06-01", 100), ("2025-06-02", 1)]);
        let cell = CalendarCell {
            date: date(2025, 6, 2),
            count: 1,
            in_year: true,
        };
        assert!((map.intensity(&cell) - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_intensity_not_comparable_across_months() {
        // The same count saturates in a quiet month and floors in a busy one.
        let map = map_of(&[("2025-04-05", 2), ("2025-05-05", 2), ("2025-05-06", 40)]);
        let april = CalendarCell {
            date: date(2025, 4, 5),
            count: 2,
            in_year: true,
        };
        let may = CalendarCell {
            date: date(2025, 5, 5),
            count: 2,
            in_year: true,
        };
        assert!((map.intensity(&april) - 1.0).abs() < f64::EPSILON);
        assert!((map.intensity(&may) - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_streak_example_from_contract() {
        // Jan 1-2 sold, Jan 3 absent, Jan 4 sold; today is Jan 5 with nothing.
        let map = map_of(&[("2025-01-01", 2), ("2025-01-02", 1), ("2025-01-04", 3)]);
        let stats = map.streaks(date(2025, 1, 5));

        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_day, Some((date(2025, 1, 4), 3)));
        assert_eq!(stats.total_sales, 6);
    }

    #[test]
    fn test_current_streak_counts_today_when_sold() {
        let map = map_of(&[("2025-01-03", 1), ("2025-01-04", 2), ("2025-01-05", 1)]);
        let stats = map.streaks(date(2025, 1, 5));
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_current_streak_zero_after_gap() {
        let map = map_of(&[("2025-01-01", 4)]);
        let stats = map.streaks(date(2025, 1, 5));
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 1);
    }

    #[test]
    fn test_longest_streak_spans_month_boundary() {
        let map = map_of(&[
            ("2025-01-30", 1),
            ("2025-01-31", 1),
            ("2025-02-01", 1),
            ("2025-02-02", 1),
        ]);
        let stats = map.streaks(date(2025, 3, 1));
        assert_eq!(stats.longest_streak, 4);
    }

    #[test]
    fn test_zero_count_entries_break_streaks() {
        let map = map_of(&[("2025-01-01", 1), ("2025-01-02", 0), ("2025-01-03", 1)]);
        let stats = map.streaks(date(2025, 1, 3));
        assert_eq!(stats.longest_streak, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_empty_map() {
        let map = SalesActivityMap::new();
        let stats = map.streaks(date(2025, 1, 1));
        assert_eq!(stats, StreakStats::default());
        assert!(map.is_empty());
    }

    #[test]
    fn test_from_wire_drops_garbage_dates() {
        let map = map_of(&[("2025-01-01", 2), ("not-a-date", 9)]);
        assert_eq!(map.count_on(date(2025, 1, 1)), 2);
        assert_eq!(map.streaks(date(2025, 1, 1)).total_sales, 2);
    }
}
