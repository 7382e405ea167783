use chrono::{Datelike, Months, NaiveDate};

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `offset` months after `start`'s month
pub fn month_start(start: NaiveDate, offset: u32) -> NaiveDate {
    let first = first_of_month(start);
    first.checked_add_months(Months::new(offset)).unwrap_or(first)
}

/// e.g. "November 2026"
pub fn month_label(start: NaiveDate, offset: u32) -> String {
    month_start(start, offset).format("%B %Y").to_string()
}
