use crate::calendar::{
    format_long_date, month_name, streak_message, zodiac_sign, Holiday, Season, HOLIDAY_YEAR,
};
use crate::models::{
    CalendarData, DayRecord, DryStreak, HolidayCount, MonthGroup, MonthSummary, PeakDay,
    TopHoliday, YearReview,
};
use chrono::{Datelike, NaiveDate};

pub fn build_review(data: &CalendarData) -> YearReview {
    let months = &data.months;

    let max = max_drinks(months);
    let peak_day = peak_day(months).map(|day| {
        let season = Season::for_date(day.date);
        PeakDay {
            date: day.date,
            label: format_long_date(day.date),
            drinks: day.drinks,
            season: season.name().to_string(),
            message: season.message().to_string(),
        }
    });

    let streak = longest_dry_streak(months);

    let summaries = month_summaries(months);
    let highest_month = summaries.iter().find(|month| month.is_max).cloned();
    let lowest_month = summaries.iter().find(|month| month.is_min).cloned();
    let zodiac_sign = highest_month
        .as_ref()
        .and_then(|month| zodiac_sign(month.month))
        .map(str::to_string);

    let holidays = holiday_counts(months);
    let top_holiday = top_holiday(&holidays)
        .filter(|holiday| holiday.drinks > 0)
        .map(|holiday| TopHoliday {
            name: holiday.name.clone(),
            drinks: holiday.drinks,
            message: holiday.holiday.message().to_string(),
        });

    YearReview {
        year: HOLIDAY_YEAR,
        summary: data.stats.clone(),
        drinking_days: data.stats.drinking_days(),
        max_drinks: max,
        peak_day,
        dry_streak: DryStreak {
            days: streak,
            message: streak_message(streak).to_string(),
        },
        months: summaries,
        highest_month,
        lowest_month,
        zodiac_sign,
        holidays,
        top_holiday,
    }
}

pub fn month_summaries(months: &[MonthGroup]) -> Vec<MonthSummary> {
    let totals = monthly_totals(months);
    let range = MonthRange::from_totals(&totals);

    months
        .iter()
        .zip(&totals)
        .enumerate()
        .map(|(index, (month, &total))| MonthSummary {
            year: month.year,
            month: month.month,
            name: month_name(month.month).to_string(),
            total,
            level: range.level(total),
            is_min: range.min_index == Some(index),
            is_max: range.max_index == Some(index),
        })
        .collect()
}

/// Every record in input order: month groups first, then their days.
pub fn all_days(months: &[MonthGroup]) -> impl Iterator<Item = &DayRecord> {
    months.iter().flat_map(|month| month.days.iter())
}

pub fn max_drinks(months: &[MonthGroup]) -> u32 {
    all_days(months).map(|day| day.drinks).max().unwrap_or(0)
}

/// First record carrying the yearly maximum, if anyone drank at all.
pub fn peak_day(months: &[MonthGroup]) -> Option<&DayRecord> {
    let max = max_drinks(months);
    if max == 0 {
        return None;
    }
    all_days(months).find(|day| day.drinks == max)
}

pub fn longest_dry_streak(months: &[MonthGroup]) -> u32 {
    let mut days: Vec<&DayRecord> = all_days(months).collect();
    days.sort_by_key(|day| day.date);

    let mut longest = 0u32;
    let mut current = 0u32;
    for day in days {
        if day.drinks == 0 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

pub fn drinks_on(months: &[MonthGroup], date: NaiveDate) -> u32 {
    all_days(months)
        .find(|day| day.date == date)
        .map(|day| day.drinks)
        .unwrap_or(0)
}

pub fn record_for_day(month: &MonthGroup, day: u32) -> Option<&DayRecord> {
    month.days.iter().find(|record| record.date.day() == day)
}

pub fn drinks_on_day(month: &MonthGroup, day: u32) -> u32 {
    record_for_day(month, day).map(|record| record.drinks).unwrap_or(0)
}

/// Drinks on each fixed holiday, earliest holiday first.
pub fn holiday_counts(months: &[MonthGroup]) -> Vec<HolidayCount> {
    let mut counts: Vec<HolidayCount> = Holiday::ALL
        .into_iter()
        .filter_map(|holiday| {
            let date = holiday.date()?;
            Some(HolidayCount {
                holiday,
                name: holiday.name().to_string(),
                date,
                drinks: drinks_on(months, date),
            })
        })
        .collect();
    counts.sort_by_key(|holiday| holiday.date);
    counts
}

pub fn top_holiday(counts: &[HolidayCount]) -> Option<&HolidayCount> {
    let max = counts.iter().map(|holiday| holiday.drinks).max()?;
    counts.iter().find(|holiday| holiday.drinks == max)
}

pub fn monthly_totals(months: &[MonthGroup]) -> Vec<u64> {
    months.iter().map(MonthGroup::total).collect()
}

/// Spread of the non-zero monthly totals, used for highlighting and levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthRange {
    pub min: u64,
    pub max: u64,
    pub min_index: Option<usize>,
    pub max_index: Option<usize>,
}

impl MonthRange {
    pub fn from_totals(totals: &[u64]) -> Self {
        let non_zero = totals.iter().copied().filter(|&total| total > 0);
        let (Some(min), Some(max)) = (non_zero.clone().min(), non_zero.max()) else {
            return Self::default();
        };

        Self {
            min,
            max,
            min_index: totals.iter().position(|&total| total == min),
            max_index: totals.iter().position(|&total| total == max),
        }
    }

    /// Maps a month total onto 0..=3; the smallest non-zero month is 1 and
    /// the largest is 3.
    pub fn level(&self, total: u64) -> u8 {
        if total == 0 {
            return 0;
        }
        if self.min == self.max {
            return 3;
        }
        let t = total.saturating_sub(self.min) as f64 / (self.max - self.min) as f64;
        (1.0 + t * 2.0).round().clamp(1.0, 3.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatsSummary;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn month_of(year: i32, month: u32, counts: &[u32]) -> MonthGroup {
        MonthGroup {
            year,
            month,
            days: counts
                .iter()
                .enumerate()
                .map(|(index, &drinks)| DayRecord {
                    date: date(year, month, index as u32 + 1),
                    drinks,
                })
                .collect(),
        }
    }

    #[test]
    fn streak_counts_trailing_run_after_nonzero_day() {
        let months = vec![month_of(2025, 1, &[0, 0, 5, 0, 0, 0, 2])];
        assert_eq!(longest_dry_streak(&months), 3);
    }

    #[test]
    fn streak_is_zero_when_every_day_has_drinks() {
        let months = vec![month_of(2025, 2, &[1; 28])];
        assert_eq!(longest_dry_streak(&months), 0);
    }

    #[test]
    fn streak_spans_every_day_of_a_dry_year() {
        let months: Vec<MonthGroup> = (1..=12)
            .map(|month| {
                let len = crate::calendar::days_in_month(2025, month) as usize;
                month_of(2025, month, &vec![0; len])
            })
            .collect();
        assert_eq!(longest_dry_streak(&months), 365);
    }

    #[test]
    fn streak_sorts_records_by_date_first() {
        let mut month = month_of(2025, 3, &[0, 0, 4, 0, 0, 0, 0]);
        month.days.reverse();
        let earlier = month_of(2025, 2, &[3]);
        let months = vec![month, earlier];
        assert_eq!(longest_dry_streak(&months), 4);
    }

    #[test]
    fn streak_crosses_month_boundaries() {
        let mut january = month_of(2025, 1, &[0; 31]);
        january.days[..29].iter_mut().for_each(|day| day.drinks = 1);
        let february = month_of(2025, 2, &[0, 0, 0, 6]);
        assert_eq!(longest_dry_streak(&[january, february]), 5);
    }

    #[test]
    fn peak_day_keeps_first_match() {
        let months = vec![month_of(2025, 1, &[2, 7, 1]), month_of(2025, 2, &[7])];
        assert_eq!(max_drinks(&months), 7);
        assert_eq!(peak_day(&months).map(|day| day.date), Some(date(2025, 1, 2)));
    }

    #[test]
    fn peak_day_absent_without_drinks() {
        let months = vec![month_of(2025, 1, &[0, 0])];
        assert_eq!(max_drinks(&months), 0);
        assert!(peak_day(&months).is_none());
        assert_eq!(max_drinks(&[]), 0);
    }

    #[test]
    fn lookups_default_to_zero() {
        let months = vec![month_of(2025, 1, &[4, 0, 2])];
        assert_eq!(drinks_on(&months, date(2025, 1, 1)), 4);
        assert_eq!(drinks_on(&months, date(2025, 1, 20)), 0);
        assert_eq!(drinks_on_day(&months[0], 3), 2);
        assert_eq!(drinks_on_day(&months[0], 15), 0);
    }

    #[test]
    fn holiday_counts_are_sorted_and_default_to_zero() {
        let mut march = month_of(2025, 3, &[0; 31]);
        march.days[16].drinks = 6;
        let months = vec![march];

        let counts = holiday_counts(&months);
        let names: Vec<&str> = counts.iter().map(|holiday| holiday.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Valentine's Day",
                "St. Patrick's Day",
                "July 4th",
                "Halloween",
                "Thanksgiving",
                "Christmas",
                "New Year's Eve",
            ]
        );
        assert_eq!(counts[0].drinks, 0);
        assert_eq!(counts[1].drinks, 6);
        assert_eq!(top_holiday(&counts).map(|h| h.name.as_str()), Some("St. Patrick's Day"));
    }

    #[test]
    fn top_holiday_ties_resolve_to_earliest_date() {
        let counts = holiday_counts(&[]);
        assert!(counts.iter().all(|holiday| holiday.drinks == 0));
        assert_eq!(
            top_holiday(&counts).map(|h| h.name.as_str()),
            Some("Valentine's Day")
        );
    }

    #[test]
    fn month_range_levels() {
        let totals = [0, 10, 20, 30, 0];
        let range = MonthRange::from_totals(&totals);
        assert_eq!(range.min, 10);
        assert_eq!(range.max, 30);
        assert_eq!(range.min_index, Some(1));
        assert_eq!(range.max_index, Some(3));
        assert_eq!(range.level(0), 0);
        assert_eq!(range.level(10), 1);
        assert_eq!(range.level(20), 2);
        assert_eq!(range.level(30), 3);
    }

    #[test]
    fn month_range_equal_totals_are_level_three() {
        let range = MonthRange::from_totals(&[5, 0, 5]);
        assert_eq!(range.level(5), 3);
        assert_eq!(range.min_index, Some(0));
        assert_eq!(range.max_index, Some(0));
    }

    #[test]
    fn month_range_without_drinks_has_no_extremes() {
        let range = MonthRange::from_totals(&[0, 0, 0]);
        assert_eq!(range, MonthRange::default());
        assert_eq!(range.level(0), 0);
    }

    #[test]
    fn review_collects_derived_facts() {
        let mut june = month_of(2025, 6, &[0; 30]);
        june.days[24].drinks = 9;
        let mut december = month_of(2025, 12, &[0; 31]);
        december.days[24].drinks = 2;
        let data = CalendarData {
            months: vec![june, december],
            stats: StatsSummary {
                sum: 11,
                average_per_day: 11.0 / 61.0,
                drinkless_days: 59,
                total_days: 61,
            },
        };

        let review = build_review(&data);
        assert_eq!(review.year, 2025);
        assert_eq!(review.drinking_days, 2);
        assert_eq!(review.max_drinks, 9);

        let peak = review.peak_day.expect("peak day");
        assert_eq!(peak.date, date(2025, 6, 25));
        assert_eq!(peak.season, "Summer");
        assert_eq!(peak.label, "Wednesday, June 25th, 2025");

        assert_eq!(review.highest_month.map(|m| m.name), Some("June".to_string()));
        assert_eq!(review.lowest_month.map(|m| m.name), Some("December".to_string()));
        assert_eq!(review.zodiac_sign.as_deref(), Some("Gemini"));
        assert_eq!(review.months[0].level, 3);
        assert_eq!(review.months[1].level, 1);

        let top = review.top_holiday.expect("top holiday");
        assert_eq!(top.name, "Christmas");
        assert_eq!(top.drinks, 2);
        // June 26-30 run straight into Dec 1-24
        assert_eq!(review.dry_streak.days, 29);
    }

    #[test]
    fn review_of_empty_calendar_skips_extremes() {
        let review = build_review(&CalendarData::default());
        assert_eq!(review.year, HOLIDAY_YEAR);
        assert_eq!(review.max_drinks, 0);
        assert!(review.peak_day.is_none());
        assert!(review.highest_month.is_none());
        assert!(review.lowest_month.is_none());
        assert!(review.zodiac_sign.is_none());
        assert!(review.top_holiday.is_none());
        assert_eq!(review.dry_streak.days, 0);
        assert_eq!(review.dry_streak.message, "You never missed a day!");
        assert_eq!(review.holidays.len(), 7);
    }

    #[test]
    fn review_year_follows_holiday_table() {
        let mut december = month_of(2024, 12, &[0; 31]);
        december.days[24].drinks = 5;
        let data = CalendarData {
            months: vec![december],
            stats: StatsSummary::default(),
        };

        let review = build_review(&data);
        assert_eq!(review.year, HOLIDAY_YEAR);
        let christmas = review
            .holidays
            .iter()
            .find(|holiday| holiday.holiday == Holiday::Christmas)
            .expect("christmas");
        assert_eq!(christmas.date, date(2025, 12, 25));
        assert_eq!(christmas.drinks, 0);
        assert!(review.top_holiday.is_none());
    }

    #[test]
    fn top_holiday_message_comes_from_holiday_table() {
        let mut october = month_of(2025, 10, &[0; 31]);
        october.days[30].drinks = 4;

        let counts = holiday_counts(std::slice::from_ref(&october));
        let halloween = counts
            .iter()
            .find(|holiday| holiday.name == "Halloween")
            .expect("halloween");
        assert_eq!(halloween.holiday, Holiday::Halloween);

        let data = CalendarData {
            months: vec![october],
            stats: StatsSummary::default(),
        };
        let top = build_review(&data).top_holiday.expect("top holiday");
        assert_eq!(top.name, "Halloween");
        assert_eq!(top.message, Holiday::Halloween.message());
    }
}
