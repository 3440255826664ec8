use crate::calendar::Holiday;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub drinks: u32,
}

/// One calendar month of records. `month` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub days: Vec<DayRecord>,
}

impl MonthGroup {
    pub fn total(&self) -> u64 {
        self.days.iter().map(|day| u64::from(day.drinks)).sum()
    }

    /// Records whose date does not belong to this group's month.
    pub fn stray_records(&self) -> impl Iterator<Item = &DayRecord> + '_ {
        self.days
            .iter()
            .filter(|day| day.date.year() != self.year || day.date.month() != self.month)
    }
}

/// Totals computed by whoever produced the data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub sum: u64,
    pub average_per_day: f64,
    pub drinkless_days: u32,
    pub total_days: u32,
}

impl StatsSummary {
    pub fn drinking_days(&self) -> u32 {
        self.total_days.saturating_sub(self.drinkless_days)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarData {
    #[serde(default)]
    pub months: Vec<MonthGroup>,
    #[serde(default)]
    pub stats: StatsSummary,
}

impl CalendarData {
    pub fn record_count(&self) -> usize {
        self.months.iter().map(|month| month.days.len()).sum()
    }
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub wrapped: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayCountResponse {
    pub date: String,
    pub drinks: u32,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub name: String,
    pub total: u64,
    pub level: u8,
    pub is_min: bool,
    pub is_max: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakDay {
    pub date: NaiveDate,
    pub label: String,
    pub drinks: u32,
    pub season: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HolidayCount {
    #[serde(skip)]
    pub holiday: Holiday,
    pub name: String,
    pub date: NaiveDate,
    pub drinks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopHoliday {
    pub name: String,
    pub drinks: u32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DryStreak {
    pub days: u32,
    pub message: String,
}

/// Everything shown on the Wrapped overlay, derived from one `CalendarData`.
#[derive(Debug, Clone, Serialize)]
pub struct YearReview {
    pub year: i32,
    pub summary: StatsSummary,
    pub drinking_days: u32,
    pub max_drinks: u32,
    pub peak_day: Option<PeakDay>,
    pub dry_streak: DryStreak,
    pub months: Vec<MonthSummary>,
    pub highest_month: Option<MonthSummary>,
    pub lowest_month: Option<MonthSummary>,
    pub zodiac_sign: Option<String>,
    pub holidays: Vec<HolidayCount>,
    pub top_holiday: Option<TopHoliday>,
}
