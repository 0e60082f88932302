//! Conversions between the date picker's calendar type and the
//! `chrono` dates the validation rules work with.

use chrono::{Datelike, NaiveDate};
use shared_ui::{Date, Month};

/// The user's local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn to_naive(date: Date) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), u8::from(date.month()) as u32, date.day() as u32)
}

pub fn to_picker(date: NaiveDate) -> Option<Date> {
    let month = Month::try_from(date.month() as u8).ok()?;
    Date::from_calendar_date(date.year(), month, date.day() as u8).ok()
}
