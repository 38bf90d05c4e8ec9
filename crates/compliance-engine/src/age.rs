use chrono::{Datelike, NaiveDate};

/// Completed years between `birth` and `reference`.
///
/// One less than the calendar-year difference while the birthday has not yet
/// come round in the reference year. A Feb 29 birthday is reached on Mar 1 in
/// common years. Negative when `birth` is after `reference`.
pub fn completed_years(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birth.year();

    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }

    age
}

/// Whole calendar days from `start` to `end` (negative if `end` is earlier)
pub fn elapsed_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}
