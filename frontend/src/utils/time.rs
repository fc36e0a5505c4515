use chrono::{DateTime, Utc};

pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y").to_string()
}

pub fn relative_to_now(value: &DateTime<Utc>) -> String {
    relative_between(value, &Utc::now())
}

/// Spanish relative time, e.g. "hace 5 minutos".
pub fn relative_between(value: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = (*now - *value).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    match (days, hours, minutes) {
        (0, 0, 0) => "hace unos segundos".to_string(),
        (0, 0, 1) => "hace 1 minuto".to_string(),
        (0, 0, m) => format!("hace {} minutos", m),
        (0, 1, _) => "hace alrededor de 1 hora".to_string(),
        (0, h, _) => format!("hace alrededor de {} horas", h),
        (1, _, _) => "hace 1 día".to_string(),
        (d, _, _) if d < 30 => format!("hace {} días", d),
        (d, _, _) if d < 60 => "hace alrededor de 1 mes".to_string(),
        (d, _, _) if d < 365 => format!("hace {} meses", d / 30),
        (d, _, _) => format!("hace más de {} años", (d / 365).max(1)),
    }
}

pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 10, 5, 0).unwrap()
    }

    #[test]
    fn formats_dates_day_first() {
        assert_eq!(format_date_time(&base()), "01/07/2025 10:05");
        assert_eq!(format_date(&base()), "01/07/2025");
    }

    #[test]
    fn relative_time_buckets() {
        let now = base();
        assert_eq!(relative_between(&now, &now), "hace unos segundos");
        assert_eq!(
            relative_between(&(now - Duration::minutes(5)), &now),
            "hace 5 minutos"
        );
        assert_eq!(
            relative_between(&(now - Duration::hours(3)), &now),
            "hace alrededor de 3 horas"
        );
        assert_eq!(relative_between(&(now - Duration::days(1)), &now), "hace 1 día");
        assert_eq!(relative_between(&(now - Duration::days(12)), &now), "hace 12 días");
    }

    #[test]
    fn future_timestamps_clamp_to_now() {
        let now = base();
        assert_eq!(
            relative_between(&(now + Duration::minutes(10)), &now),
            "hace unos segundos"
        );
    }

    #[test]
    fn short_id_takes_prefix() {
        assert_eq!(short_id("8f14e45f-ceea-4e7a"), "8f14e45f");
        assert_eq!(short_id("42"), "42");
    }
}
