use crate::calendar::days_in_month;
use crate::models::CalendarData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/calendar.json"))
}

/// Reads the calendar file. A missing or unreadable file yields an empty
/// calendar so the page still renders.
pub async fn load_data(path: &Path) -> CalendarData {
    let data = match fs::read(path).await {
        Ok(bytes) => match parse_data(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                CalendarData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no data file at {}, starting empty", path.display());
            CalendarData::default()
        }
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            CalendarData::default()
        }
    };

    check_data(&data);
    data
}

pub fn parse_data(bytes: &[u8]) -> Result<CalendarData, serde_json::Error> {
    serde_json::from_slice(bytes)
}

fn check_data(data: &CalendarData) {
    for month in &data.months {
        if days_in_month(month.year, month.month) == 0 {
            warn!(year = month.year, month = month.month, "month group has an invalid month");
            continue;
        }
        for record in month.stray_records() {
            warn!(
                date = %record.date,
                year = month.year,
                month = month.month,
                "record is outside its month group"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_data_reads_months_and_stats() {
        let json = br#"{
            "months": [
                { "year": 2025, "month": 1, "days": [
                    { "date": "2025-01-01", "drinks": 3 },
                    { "date": "2025-01-02", "drinks": 0 }
                ] },
                { "year": 2025, "month": 2 }
            ],
            "stats": { "sum": 3, "average_per_day": 1.5, "drinkless_days": 1, "total_days": 2 }
        }"#;

        let data = parse_data(json).expect("valid data");
        assert_eq!(data.months.len(), 2);
        assert_eq!(data.record_count(), 2);
        assert!(data.months[1].days.is_empty());
        assert_eq!(data.stats.sum, 3);
        assert_eq!(data.stats.drinking_days(), 1);
    }

    #[test]
    fn parse_data_rejects_negative_counts() {
        let json = br#"{ "months": [ { "year": 2025, "month": 1, "days": [
            { "date": "2025-01-01", "drinks": -1 }
        ] } ] }"#;
        assert!(parse_data(json).is_err());
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("drink_calendar_{name}_{}_{nanos}.json", std::process::id()));
        std::fs::write(&path, contents).expect("write temp file");
        path
    }

    #[tokio::test]
    async fn load_data_defaults_when_malformed() {
        let path = temp_file("malformed", r#"{ "months": [ { "year": 2025, "#);
        let data = load_data(&path).await;
        let _ = std::fs::remove_file(&path);
        assert_eq!(data, CalendarData::default());
    }

    #[tokio::test]
    async fn load_data_defaults_when_unreadable() {
        // a directory exists but cannot be read as a file
        let data = load_data(&std::env::temp_dir()).await;
        assert_eq!(data, CalendarData::default());
    }

    #[tokio::test]
    async fn load_data_keeps_suspicious_records() {
        let path = temp_file(
            "suspicious",
            r#"{ "months": [
                { "year": 2025, "month": 13, "days": [
                    { "date": "2025-01-05", "drinks": 2 }
                ] },
                { "year": 2025, "month": 4, "days": [
                    { "date": "2025-05-01", "drinks": 1 }
                ] }
            ] }"#,
        );
        let data = load_data(&path).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(data.months.len(), 2);
        assert_eq!(data.months[0].month, 13);
        assert_eq!(data.months[0].days.len(), 1);
        assert_eq!(data.months[0].days[0].drinks, 2);
        assert_eq!(data.months[1].stray_records().count(), 1);
        assert_eq!(data.record_count(), 2);
    }

    #[tokio::test]
    async fn load_data_defaults_when_missing() {
        let mut path = std::env::temp_dir();
        path.push(format!("drink_calendar_missing_{}.json", std::process::id()));
        let data = load_data(&path).await;
        assert!(data.months.is_empty());
        assert_eq!(data.stats.total_days, 0);
    }
}
