use chrono::NaiveDate;

/// Formats a date the way the admin views show it, e.g. "March 15, 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_month_name_without_day_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_long_date(date), "March 5, 2024");
    }
}
