//! Date parsing and pt-BR formatting for the views.
//!
//! Backend dates arrive either as RFC 3339 timestamps or as bare
//! `YYYY-MM-DD` dates, which are read as midnight UTC.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Relative time in whole days, months (30 days) or years (365 days).
///
/// Days are rounded up, so anything within the last 24 hours reads
/// "1 dia atrás".
pub fn format_time_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (now - date).num_milliseconds().abs();
    let days = (diff_ms + DAY_MS - 1) / DAY_MS;

    match days {
        1 => "1 dia atrás".to_string(),
        d if d < 30 => format!("{d} dias atrás"),
        d if d < 365 => format!("{} meses atrás", d / 30),
        d => format!("{} anos atrás", d / 365),
    }
}

/// `dd/mm/aaaa`, or "Não informada" when missing or unreadable.
pub fn format_date_br(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "Não informada".to_string())
}

/// Whole years between a birth date and `today`.
pub fn patient_age(date_of_birth: Option<&str>, today: NaiveDate) -> Option<u32> {
    let born = date_of_birth.and_then(parse_date)?.date_naive();
    if born > today {
        return None;
    }
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_timestamps_and_plain_dates() {
        assert_eq!(
            parse_date("2024-03-01T10:30:00.000Z"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap())
        );
        assert_eq!(
            parse_date("2024-03-01"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_date("ontem"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn time_ago_buckets() {
        let n = now();
        assert_eq!(format_time_ago(n - Duration::days(1), n), "1 dia atrás");
        assert_eq!(format_time_ago(n - Duration::hours(3), n), "1 dia atrás");
        assert_eq!(format_time_ago(n - Duration::days(10), n), "10 dias atrás");
        assert_eq!(format_time_ago(n - Duration::days(29), n), "29 dias atrás");
        assert_eq!(format_time_ago(n - Duration::days(45), n), "1 meses atrás");
        assert_eq!(format_time_ago(n - Duration::days(364), n), "12 meses atrás");
        assert_eq!(format_time_ago(n - Duration::days(800), n), "2 anos atrás");
    }

    #[test]
    fn time_ago_partial_day_rounds_up() {
        let n = now();
        let date = n - Duration::days(9) - Duration::hours(1);
        assert_eq!(format_time_ago(date, n), "10 dias atrás");
    }

    #[test]
    fn future_dates_use_absolute_distance() {
        let n = now();
        assert_eq!(format_time_ago(n + Duration::days(5), n), "5 dias atrás");
    }

    #[test]
    fn brazilian_date_format() {
        assert_eq!(format_date_br(Some("1990-07-04")), "04/07/1990");
        assert_eq!(format_date_br(Some("lixo")), "Não informada");
        assert_eq!(format_date_br(None), "Não informada");
    }

    #[test]
    fn age_counts_completed_years() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(patient_age(Some("1990-06-15"), today), Some(35));
        assert_eq!(patient_age(Some("1990-06-16"), today), Some(34));
        assert_eq!(patient_age(Some("2030-01-01"), today), None);
        assert_eq!(patient_age(None, today), None);
    }
}
