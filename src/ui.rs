use crate::calendar::{
    days_in_month, days_label, drinks_label, first_weekday, format_long_date, format_short_date,
    month_name, ColorBand, WEEKDAY_HEADERS,
};
use crate::models::{CalendarData, MonthGroup, MonthSummary, YearReview};
use crate::stats::{drinks_on_day, record_for_day};

/// One page of the Wrapped overlay. Pages are numbered from 1 in links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrappedPage {
    Totals,
    PeakAndValley,
    PeakDay,
    DryStreak,
    Holidays,
}

impl WrappedPage {
    pub const ALL: [WrappedPage; 5] = [
        WrappedPage::Totals,
        WrappedPage::PeakAndValley,
        WrappedPage::PeakDay,
        WrappedPage::DryStreak,
        WrappedPage::Holidays,
    ];

    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    pub fn number(self) -> usize {
        match self {
            Self::Totals => 1,
            Self::PeakAndValley => 2,
            Self::PeakDay => 3,
            Self::DryStreak => 4,
            Self::Holidays => 5,
        }
    }

    fn background(self) -> &'static str {
        match self {
            Self::Totals => "#8b5cf6",
            Self::PeakAndValley => "#ec4899",
            Self::PeakDay => "#f59e0b",
            Self::DryStreak => "#10b981",
            Self::Holidays => "#06b6d4",
        }
    }
}

pub fn render_index(data: &CalendarData, review: &YearReview, wrapped: Option<WrappedPage>) -> String {
    let months = if data.months.is_empty() {
        r#"<p class="empty">No data yet</p>"#.to_string()
    } else {
        data.months
            .iter()
            .zip(&review.months)
            .map(|(month, summary)| render_month(month, summary, review.max_drinks))
            .collect()
    };
    let overlay = wrapped
        .map(|page| render_overlay(review, page))
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{TOTAL}}", &review.summary.sum.to_string())
        .replace("{{AVERAGE}}", &format!("{:.2}", review.summary.average_per_day))
        .replace("{{DRINKLESS}}", &review.summary.drinkless_days.to_string())
        .replace("{{DRINKING}}", &review.drinking_days.to_string())
        .replace("{{MONTHS}}", &months)
        .replace("{{OVERLAY}}", &overlay)
}

fn render_month(month: &MonthGroup, summary: &MonthSummary, max_drinks: u32) -> String {
    let name = month_name(month.month);
    let highlight = if summary.is_min {
        " min"
    } else if summary.is_max {
        " max"
    } else {
        ""
    };
    let tooltip = format!(
        "{name} {}\nTotal: {}",
        month.year,
        drinks_label(summary.total)
    );

    let mut html = format!(
        r#"<section class="month"><h2 class="month-title{highlight}" data-tooltip="{}">{name} {} {}</h2><div class="month-grid">"#,
        escape(&tooltip),
        month.year,
        "🍺".repeat(summary.level as usize),
    );

    for weekday in WEEKDAY_HEADERS {
        html.push_str(&format!(r#"<div class="weekday">{weekday}</div>"#));
    }
    for _ in 0..first_weekday(month.year, month.month) {
        html.push_str(r#"<div class="cell blank"></div>"#);
    }

    for day in 1..=days_in_month(month.year, month.month) {
        let record = record_for_day(month, day);
        let drinks = drinks_on_day(month, day);
        let is_peak = drinks > 0 && drinks == max_drinks;

        let mut lines = match record {
            Some(record) => vec![format_long_date(record.date)],
            None => vec![format_short_date(month.year, month.month, day)],
        };
        lines.push(drinks_label(u64::from(drinks)));
        if record.is_some() && is_peak {
            lines.push("Most Drinks of the Year".to_string());
        }

        html.push_str(&format!(
            r#"<div class="cell{}" style="background-color: {}" data-tooltip="{}"><span class="day">{day}</span><span class="count">{drinks}</span></div>"#,
            if is_peak { " peak" } else { "" },
            ColorBand::for_drinks(drinks).hex(),
            escape(&lines.join("\n")),
        ));
    }

    html.push_str("</div></section>");
    html
}

fn render_overlay(review: &YearReview, page: WrappedPage) -> String {
    let body = match page {
        WrappedPage::Totals => render_totals(review),
        WrappedPage::PeakAndValley => render_peak_and_valley(review),
        WrappedPage::PeakDay => render_peak_day(review),
        WrappedPage::DryStreak => render_dry_streak(review),
        WrappedPage::Holidays => render_holidays(review),
    };

    let nav: String = WrappedPage::ALL
        .into_iter()
        .map(|other| {
            let number = other.number();
            if other == page {
                format!(r#"<button class="page current" type="button" disabled>{number}</button>"#)
            } else {
                format!(r#"<a class="page" href="/?wrapped={number}">{number}</a>"#)
            }
        })
        .collect();

    format!(
        r#"<div class="overlay" id="overlay"><div class="wrapped" style="background-color: {}"><a class="close" href="/" aria-label="Close">&times;</a><div class="wrapped-body">{body}</div><nav class="pages">{nav}</nav></div></div>"#,
        page.background()
    )
}

fn render_totals(review: &YearReview) -> String {
    let summary = &review.summary;
    format!(
        r#"<h1 class="big">Your {} Wrapped</h1><div class="figures"><div><div class="figure-label">Total Drinks</div><div class="figure">{}</div></div><div><div class="figure-label">Average Per Day</div><div class="figure">{:.2}</div></div><div><div class="figure-label">Drinkless Days</div><div class="figure">{}</div></div><div><div class="figure-label">Drinking Days</div><div class="figure">{}</div></div></div>"#,
        review.year,
        summary.sum,
        summary.average_per_day,
        summary.drinkless_days,
        review.drinking_days,
    )
}

fn render_month_fact(label: &str, month: &MonthSummary) -> String {
    format!(
        r#"<div class="fact"><div class="figure-label">{label}</div><div class="headline">{} {}</div><div class="detail">{} drinks</div></div>"#,
        escape(&month.name),
        month.year,
        month.total,
    )
}

fn render_peak_and_valley(review: &YearReview) -> String {
    let mut html = String::from("<h1>Your Peak &amp; Valley</h1>");
    if let Some(month) = &review.highest_month {
        html.push_str(&render_month_fact("Highest Month", month));
    }
    if let Some(month) = &review.lowest_month {
        html.push_str(&render_month_fact("Lowest Month", month));
    }
    if let Some(sign) = &review.zodiac_sign {
        html.push_str(&format!(r#"<p class="quip">That's so {} of you</p>"#, escape(sign)));
    }
    html
}

fn render_peak_day(review: &YearReview) -> String {
    let mut html = String::from("<h1>Your Peak Day</h1>");
    if let Some(peak) = &review.peak_day {
        html.push_str(&format!(
            r#"<div class="fact"><div class="figure-label">Highest Drinking Day</div><div class="headline">{}</div><div class="detail">{}</div></div><p class="quip">{}</p>"#,
            escape(&peak.label),
            drinks_label(u64::from(peak.drinks)),
            escape(&peak.message),
        ));
    }
    html
}

fn render_dry_streak(review: &YearReview) -> String {
    format!(
        r#"<h1>Your Dry Streak</h1><p class="detail">Your record was {} without a drink this year</p><p class="quip">{}</p>"#,
        days_label(review.dry_streak.days),
        escape(&review.dry_streak.message),
    )
}

fn render_holidays(review: &YearReview) -> String {
    let mut html = String::from(r#"<h1>Holiday Cheers</h1><ul class="holidays">"#);
    for holiday in &review.holidays {
        html.push_str(&format!(
            "<li>{}: {}</li>",
            escape(&holiday.name),
            drinks_label(u64::from(holiday.drinks))
        ));
    }
    html.push_str("</ul>");
    if let Some(top) = &review.top_holiday {
        html.push_str(&format!(r#"<p class="quip">{}</p>"#, escape(&top.message)));
    }
    html
}

/// Escapes text for element content and double- or single-quoted attributes.
/// Newlines become `&#10;` so multi-line tooltips survive attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\n' => escaped.push_str("&#10;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Drink Calendar</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --ink: #1f2937;
      --muted: #4b5563;
      --panel: #eff6ff;
      --panel-border: #bfdbfe;
      --accent: #7c3aed;
      --accent-hover: #6d28d9;
      --cell-border: #d1d5db;
      --peak: #00ffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .app {
      padding: 24px;
      max-width: 1800px;
      margin: 0 auto;
    }

    .stats {
      background: var(--panel);
      border: 1px solid var(--panel-border);
      border-radius: 6px;
      padding: 12px;
      margin-bottom: 16px;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .stats h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 18px;
      margin: 0 0 8px;
    }

    .stat-row {
      display: flex;
      gap: 24px;
    }

    .stat .label {
      font-size: 11px;
      color: var(--muted);
      margin-bottom: 2px;
    }

    .stat .value {
      font-size: 18px;
      font-weight: 600;
    }

    .btn-wrapped {
      background: var(--accent);
      color: white;
      border-radius: 8px;
      padding: 10px 20px;
      font-size: 14px;
      font-weight: 600;
      text-decoration: none;
      transition: background-color 200ms ease;
    }

    .btn-wrapped:hover {
      background: var(--accent-hover);
    }

    .months {
      display: grid;
      grid-template-columns: repeat(6, 1fr);
      gap: 16px;
    }

    .empty {
      color: var(--muted);
    }

    .month-title {
      font-size: 14px;
      text-align: center;
      margin: 0 0 6px;
      padding: 4px 8px;
      border-radius: 4px;
      cursor: help;
    }

    .month-title.min {
      background: #d1fae5;
    }

    .month-title.max {
      background: #ef4444;
    }

    .month-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 2px;
    }

    .weekday {
      text-align: center;
      font-weight: 600;
      font-size: 9px;
      padding: 3px 0;
    }

    .cell {
      aspect-ratio: 1;
      border: 1px solid var(--cell-border);
      border-radius: 3px;
      padding: 2px;
      position: relative;
      cursor: help;
      display: flex;
      justify-content: center;
    }

    .cell.blank {
      border: none;
      cursor: default;
    }

    .cell.peak {
      outline: 3px solid var(--peak);
      outline-offset: -2px;
    }

    .cell .day {
      font-size: 8px;
      font-weight: 600;
    }

    .cell .count {
      font-size: 12px;
      font-weight: 700;
      position: absolute;
      top: 50%;
      left: 50%;
      transform: translate(-50%, -50%);
    }

    .tooltip {
      position: fixed;
      transform: translate(-50%, -100%);
      background: var(--ink);
      color: white;
      padding: 8px 12px;
      border-radius: 6px;
      font-size: 12px;
      white-space: pre-line;
      text-align: center;
      pointer-events: none;
      z-index: 1000;
      display: none;
    }

    .overlay {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.8);
      z-index: 2000;
      display: flex;
      align-items: center;
      justify-content: center;
    }

    .wrapped {
      width: 90%;
      max-width: 800px;
      height: 90%;
      max-height: 600px;
      border-radius: 20px;
      padding: 60px;
      position: relative;
      color: white;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      text-align: center;
    }

    .wrapped h1 {
      font-size: 36px;
      margin: 0 0 30px;
    }

    .wrapped h1.big {
      font-size: 48px;
    }

    .close {
      position: absolute;
      top: 20px;
      right: 20px;
      width: 40px;
      height: 40px;
      border-radius: 50%;
      background: rgba(255, 255, 255, 0.2);
      color: white;
      font-size: 24px;
      text-decoration: none;
      display: flex;
      align-items: center;
      justify-content: center;
    }

    .figures {
      display: grid;
      grid-template-columns: repeat(2, 1fr);
      gap: 30px;
    }

    .figure-label {
      font-size: 18px;
      margin-bottom: 10px;
    }

    .figure {
      font-size: 64px;
      font-weight: 700;
    }

    .fact {
      margin-bottom: 30px;
    }

    .headline {
      font-size: 40px;
      font-weight: 700;
    }

    .detail {
      font-size: 24px;
      margin-top: 8px;
    }

    .quip {
      font-size: 24px;
      font-weight: 700;
      font-style: italic;
      margin-top: 30px;
    }

    .holidays {
      list-style: none;
      padding: 0;
      display: grid;
      gap: 15px;
      font-size: 18px;
    }

    .pages {
      position: absolute;
      bottom: 40px;
      display: flex;
      gap: 20px;
    }

    .page {
      padding: 12px 24px;
      border: 2px solid white;
      border-radius: 8px;
      background: rgba(255, 255, 255, 0.1);
      color: white;
      font: inherit;
      font-weight: 700;
      text-decoration: none;
      opacity: 0.7;
    }

    .page.current {
      background: rgba(255, 255, 255, 0.3);
      opacity: 1;
    }

    @media (max-width: 1100px) {
      .months {
        grid-template-columns: repeat(3, 1fr);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <section class="stats">
      <div>
        <h1>Drinking Statistics</h1>
        <div class="stat-row">
          <div class="stat">
            <div class="label">Total Drinks</div>
            <div class="value" id="total">{{TOTAL}}</div>
          </div>
          <div class="stat">
            <div class="label">Average Per Day</div>
            <div class="value" id="average">{{AVERAGE}}</div>
          </div>
          <div class="stat">
            <div class="label">Drinkless Days</div>
            <div class="value" id="drinkless">{{DRINKLESS}}</div>
          </div>
          <div class="stat">
            <div class="label">Drinking Days</div>
            <div class="value" id="drinking">{{DRINKING}}</div>
          </div>
        </div>
      </div>
      <a class="btn-wrapped" href="/?wrapped=1">Boozeify Wrapped</a>
    </section>

    <section class="months">
      {{MONTHS}}
    </section>
  </main>

  <div class="tooltip" id="tooltip"></div>
  {{OVERLAY}}

  <script>
    const tooltipEl = document.getElementById('tooltip');

    document.querySelectorAll('[data-tooltip]').forEach((el) => {
      el.addEventListener('mouseenter', () => {
        const rect = el.getBoundingClientRect();
        tooltipEl.textContent = el.dataset.tooltip;
        tooltipEl.style.left = `${rect.left + rect.width / 2}px`;
        tooltipEl.style.top = `${rect.top - 5}px`;
        tooltipEl.style.display = 'block';
      });
      el.addEventListener('mouseleave', () => {
        tooltipEl.style.display = 'none';
      });
    });

    const overlayEl = document.getElementById('overlay');
    if (overlayEl) {
      overlayEl.addEventListener('click', (event) => {
        if (event.target === overlayEl) {
          window.location.href = '/';
        }
      });
      document.addEventListener('keydown', (event) => {
        if (event.key === 'Escape') {
          window.location.href = '/';
        }
      });
    }
  </script>
</body>
</html>
"#;
