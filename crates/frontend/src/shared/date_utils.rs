/// Formats an ISO 8601 date or datetime as dd/mm/yyyy
///
/// Returns the input unchanged if it cannot be parsed.
pub fn format_date(iso_date: &str) -> String {
    if let Some(date_part) = iso_date.split('T').next() {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                if year.len() == 4 && month.len() == 2 && day.len() == 2 {
                    return format!("{}/{}/{}", day, month, year);
                }
            }
        }
    }
    iso_date.to_string()
}

/// Formats an ISO 8601 datetime as dd/mm/yyyy hh:mm
pub fn format_datetime(iso_datetime: &str) -> String {
    let Some((date_part, time_part)) = iso_datetime.split_once('T') else {
        return format_date(iso_datetime);
    };
    let date = format_date(date_part);
    if date == date_part {
        return iso_datetime.to_string();
    }
    let hh_mm: String = time_part.chars().take(5).collect();
    if hh_mm.len() == 5 && hh_mm.as_bytes()[2] == b':' {
        format!("{} {}", date, hh_mm)
    } else {
        date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31"), "31/12/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("bad-date-xT10:00"), "bad-date-xT10:00");
    }
}
