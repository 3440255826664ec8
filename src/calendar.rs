//! Calendar geometry, date formatting and the fixed lookup tables used by
//! the month grid and the Wrapped overlay.

use chrono::{Datelike, NaiveDate};

/// Year the holiday table is pinned to.
pub const HOLIDAY_YEAR: i32 = 2025;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Number of days in the month, or 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.map(|next| (next - first).num_days() as u32).unwrap_or(31)
}

/// Weekday of the 1st, counted from Sunday = 0.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// "Monday, March 17th, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        date.format("%A"),
        month_name(date.month()),
        ordinal(date.day()),
        date.year()
    )
}

/// "March 17, 2025"
pub fn format_short_date(year: i32, month: u32, day: u32) -> String {
    format!("{} {day}, {year}", month_name(month))
}

pub fn drinks_label(count: u64) -> String {
    if count == 1 {
        "1 drink".to_string()
    } else {
        format!("{count} drinks")
    }
}

pub fn days_label(count: u32) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{count} days")
    }
}

/// Background band of a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    Dry,
    Light,
    Moderate,
    Heavy,
    Extreme,
}

impl ColorBand {
    pub fn for_drinks(drinks: u32) -> Self {
        match drinks {
            0 => Self::Dry,
            1..=2 => Self::Light,
            3..=4 => Self::Moderate,
            5..=7 => Self::Heavy,
            _ => Self::Extreme,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Dry => "#d1fae5",
            Self::Light => "#fef08a",
            Self::Moderate => "#fed7aa",
            Self::Heavy => "#fecaca",
            Self::Extreme => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Spring Mar 20 - Jun 20, Summer Jun 21 - Sep 22, Fall Sep 23 - Dec 20,
    /// Winter for everything else.
    pub fn for_date(date: NaiveDate) -> Self {
        match (date.month(), date.day()) {
            (3, 20..=31) | (4..=5, _) | (6, 1..=20) => Self::Spring,
            (6, _) | (7..=8, _) | (9, 1..=22) => Self::Summer,
            (9, _) | (10..=11, _) | (12, 1..=20) => Self::Fall,
            _ => Self::Winter,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Fall => "Pumpkin spice? No. Pumpkin spiked.",
            Self::Winter => "You didn't beat seasonal depression, you outdrank it.",
            Self::Spring => "Flowers bloomed. So did your bar tabs.",
            Self::Summer => "When the days got longer, so did your drink count.",
        }
    }
}

const ZODIAC_SIGNS: [&str; 12] = [
    "Capricorn",
    "Aquarius",
    "Pisces",
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
];

/// Sign for a whole month. Real signs split mid-month; this table does not.
pub fn zodiac_sign(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| ZODIAC_SIGNS.get(index as usize))
        .copied()
}

pub fn streak_message(streak: u32) -> &'static str {
    match streak {
        0 => "You never missed a day!",
        1..=6 => "A week? That's just a warm-up.",
        7..=13 => "Two weeks strong, impressive restraint!",
        14..=29 => "Almost a month! Your willpower is showing.",
        30..=59 => "Two months? You're basically a monk now.",
        60..=89 => "Three months dry? Legendary discipline.",
        _ => "Over three months? You're in a league of your own.",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holiday {
    NewYearsEve,
    Thanksgiving,
    Halloween,
    Christmas,
    IndependenceDay,
    StPatricksDay,
    ValentinesDay,
}

impl Holiday {
    pub const ALL: [Holiday; 7] = [
        Holiday::NewYearsEve,
        Holiday::Thanksgiving,
        Holiday::Halloween,
        Holiday::Christmas,
        Holiday::IndependenceDay,
        Holiday::StPatricksDay,
        Holiday::ValentinesDay,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::NewYearsEve => "New Year's Eve",
            Self::Thanksgiving => "Thanksgiving",
            Self::Halloween => "Halloween",
            Self::Christmas => "Christmas",
            Self::IndependenceDay => "July 4th",
            Self::StPatricksDay => "St. Patrick's Day",
            Self::ValentinesDay => "Valentine's Day",
        }
    }

    pub fn date(self) -> Option<NaiveDate> {
        let (month, day) = match self {
            Self::NewYearsEve => (12, 31),
            // fourth Thursday of November 2025
            Self::Thanksgiving => (11, 27),
            Self::Halloween => (10, 31),
            Self::Christmas => (12, 25),
            Self::IndependenceDay => (7, 4),
            Self::StPatricksDay => (3, 17),
            Self::ValentinesDay => (2, 14),
        };
        NaiveDate::from_ymd_opt(HOLIDAY_YEAR, month, day)
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::NewYearsEve => "You rang in the new year with style, and several drinks.",
            Self::Thanksgiving => "You were truly grateful... for the open bar.",
            Self::Halloween => "The scariest thing about Halloween? Your bar tab.",
            Self::Christmas => "Santa wasn't the only one making the rounds that night.",
            Self::IndependenceDay => "You celebrated independence... from sobriety.",
            Self::StPatricksDay => "The luck of the Irish? More like the luck of the bar.",
            Self::ValentinesDay => "Love was in the air... and so was your drink count.",
        }
    }
}
