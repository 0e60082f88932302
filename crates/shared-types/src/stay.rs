//! Stay search request and its validation rules.
//!
//! The rules are plain functions over the draft so the form layer only has
//! to decide *when* to run them. The check-out rule takes check-in as an
//! explicit argument; there is no hidden lookup of sibling fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::AppError;

/// Minimum number of guests per booking.
pub const MIN_GUESTS: u32 = 1;

/// Minimum number of rooms per booking.
pub const MIN_ROOMS: u32 = 1;

/// Fields of the stay search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StayField {
    CheckIn,
    CheckOut,
    Guests,
    Rooms,
}

/// All fields in form order.
pub const STAY_FIELDS: &[StayField] = &[
    StayField::CheckIn,
    StayField::CheckOut,
    StayField::Guests,
    StayField::Rooms,
];

impl StayField {
    /// Key used in `AppError::field_errors` and the serialized request.
    pub fn key(&self) -> &'static str {
        match self {
            StayField::CheckIn => "checkIn",
            StayField::CheckOut => "checkOut",
            StayField::Guests => "guests",
            StayField::Rooms => "rooms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StayField::CheckIn => "Check-in Date",
            StayField::CheckOut => "Check-out Date",
            StayField::Guests => "Number of Guests",
            StayField::Rooms => "Number of Rooms",
        }
    }
}

/// A violated validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayRule {
    CheckInRequired,
    CheckInInPast,
    CheckOutRequired,
    CheckOutNotAfterCheckIn,
    CheckOutInPast,
    TooFewGuests,
    TooFewRooms,
}

impl StayRule {
    /// The field this rule reports against.
    pub fn field(&self) -> StayField {
        match self {
            StayRule::CheckInRequired | StayRule::CheckInInPast => StayField::CheckIn,
            StayRule::CheckOutRequired
            | StayRule::CheckOutNotAfterCheckIn
            | StayRule::CheckOutInPast => StayField::CheckOut,
            StayRule::TooFewGuests => StayField::Guests,
            StayRule::TooFewRooms => StayField::Rooms,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StayRule::CheckInRequired => "Check-in date is required",
            StayRule::CheckInInPast => "Check-in date must be today or later",
            StayRule::CheckOutRequired => "Check-out date is required",
            StayRule::CheckOutNotAfterCheckIn => "Check-out date must be after check-in",
            StayRule::CheckOutInPast => "Check-out date must be today or later",
            StayRule::TooFewGuests => "Minimum 1 guest",
            StayRule::TooFewRooms => "Minimum 1 room",
        }
    }
}

impl fmt::Display for StayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub fn validate_check_in(check_in: Option<NaiveDate>, today: NaiveDate) -> Result<NaiveDate, StayRule> {
    let date = check_in.ok_or(StayRule::CheckInRequired)?;
    if date < today {
        return Err(StayRule::CheckInInPast);
    }
    Ok(date)
}

/// Check-out must be strictly after check-in and not in the past.
///
/// When check-in is missing only the date-vs-today rule applies; the missing
/// check-in is reported on its own field.
pub fn validate_check_out(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<NaiveDate, StayRule> {
    let date = check_out.ok_or(StayRule::CheckOutRequired)?;
    if let Some(check_in) = check_in {
        if date <= check_in {
            return Err(StayRule::CheckOutNotAfterCheckIn);
        }
    }
    if date < today {
        return Err(StayRule::CheckOutInPast);
    }
    Ok(date)
}

pub fn validate_guests(guests: u32) -> Result<u32, StayRule> {
    if guests < MIN_GUESTS {
        return Err(StayRule::TooFewGuests);
    }
    Ok(guests)
}

pub fn validate_rooms(rooms: u32) -> Result<u32, StayRule> {
    if rooms < MIN_ROOMS {
        return Err(StayRule::TooFewRooms);
    }
    Ok(rooms)
}

/// Parse a number input the way the browser reads it: `"2.0"` and `"1e3"`
/// are numbers, fractions round down and huge values saturate. Blank,
/// negative or non-numeric text becomes 0 so the minimum rule reports it.
pub fn parse_count(input: &str) -> u32 {
    match input.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n.floor().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Unsaved form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDraft {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub rooms: u32,
}

impl Default for StayDraft {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests: MIN_GUESTS,
            rooms: MIN_ROOMS,
        }
    }
}

impl StayDraft {
    /// Run the rule for a single field against the rest of the draft.
    pub fn validate_field(&self, field: StayField, today: NaiveDate) -> Option<StayRule> {
        match field {
            StayField::CheckIn => validate_check_in(self.check_in, today).err(),
            StayField::CheckOut => validate_check_out(self.check_in, self.check_out, today).err(),
            StayField::Guests => validate_guests(self.guests).err(),
            StayField::Rooms => validate_rooms(self.rooms).err(),
        }
    }

    /// Validate every field, collecting one failure per field in form order.
    pub fn validate(&self, today: NaiveDate) -> Result<StayRequest, StayErrors> {
        let check_in = validate_check_in(self.check_in, today);
        let check_out = validate_check_out(self.check_in, self.check_out, today);
        let guests = validate_guests(self.guests);
        let rooms = validate_rooms(self.rooms);

        match (check_in, check_out, guests, rooms) {
            (Ok(check_in), Ok(check_out), Ok(guests), Ok(rooms)) => Ok(StayRequest {
                check_in,
                check_out,
                guests,
                rooms,
            }),
            (check_in, check_out, guests, rooms) => Err(StayErrors(
                [
                    check_in.err(),
                    check_out.err(),
                    guests.err(),
                    rooms.err(),
                ]
                .into_iter()
                .flatten()
                .collect(),
            )),
        }
    }
}

/// A validated stay search, ready for the search collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StayRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
}

impl StayRequest {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Per-field failures from [`StayDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StayErrors(Vec<StayRule>);

impl StayErrors {
    pub fn get(&self, field: StayField) -> Option<StayRule> {
        self.0.iter().copied().find(|rule| rule.field() == field)
    }

    pub fn rules(&self) -> &[StayRule] {
        &self.0
    }
}

impl fmt::Display for StayErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|r| r.message()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl From<StayErrors> for AppError {
    fn from(errors: StayErrors) -> Self {
        let field_errors: HashMap<String, String> = errors
            .0
            .iter()
            .map(|rule| (rule.field().key().to_string(), rule.message().to_string()))
            .collect();
        AppError::validation("Please fix the highlighted fields", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn draft(check_in: NaiveDate, check_out: NaiveDate, guests: u32, rooms: u32) -> StayDraft {
        StayDraft {
            check_in: Some(check_in),
            check_out: Some(check_out),
            guests,
            rooms,
        }
    }

    #[test]
    fn check_in_yesterday_is_rejected() {
        let yesterday = today() - Duration::days(1);
        let tomorrow = today() + Duration::days(1);
        let errors = draft(yesterday, tomorrow, 2, 1).validate(today()).unwrap_err();

        assert_eq!(errors.get(StayField::CheckIn), Some(StayRule::CheckInInPast));
        assert_eq!(
            errors.get(StayField::CheckIn).unwrap().message(),
            "Check-in date must be today or later"
        );
    }

    #[test]
    fn same_day_check_out_is_rejected() {
        let errors = draft(today(), today(), 2, 1).validate(today()).unwrap_err();

        assert_eq!(errors.rules(), &[StayRule::CheckOutNotAfterCheckIn]);
        assert_eq!(
            errors.get(StayField::CheckOut).unwrap().message(),
            "Check-out date must be after check-in"
        );
    }

    #[test]
    fn zero_guests_is_rejected() {
        let tomorrow = today() + Duration::days(1);
        let errors = draft(today(), tomorrow, 0, 1).validate(today()).unwrap_err();

        assert_eq!(errors.rules(), &[StayRule::TooFewGuests]);
        assert_eq!(errors.to_string(), "Minimum 1 guest");
    }

    #[test]
    fn zero_rooms_is_rejected() {
        let tomorrow = today() + Duration::days(1);
        let errors = draft(today(), tomorrow, 2, 0).validate(today()).unwrap_err();
        assert_eq!(errors.rules(), &[StayRule::TooFewRooms]);
    }

    #[test]
    fn valid_draft_passes_through_unchanged() {
        let tomorrow = today() + Duration::days(1);
        let request = draft(today(), tomorrow, 2, 1).validate(today()).unwrap();

        assert_eq!(
            request,
            StayRequest {
                check_in: today(),
                check_out: tomorrow,
                guests: 2,
                rooms: 1,
            }
        );
        assert_eq!(request.nights(), 1);
    }

    #[test]
    fn empty_draft_reports_both_dates_required() {
        let errors = StayDraft::default().validate(today()).unwrap_err();
        assert_eq!(
            errors.rules(),
            &[StayRule::CheckInRequired, StayRule::CheckOutRequired]
        );
    }

    #[test]
    fn errors_are_collected_in_field_order() {
        let yesterday = today() - Duration::days(1);
        let errors = draft(yesterday, yesterday, 0, 0).validate(today()).unwrap_err();
        assert_eq!(
            errors.rules(),
            &[
                StayRule::CheckInInPast,
                StayRule::CheckOutNotAfterCheckIn,
                StayRule::TooFewGuests,
                StayRule::TooFewRooms,
            ]
        );
    }

    #[test]
    fn check_out_in_past_without_check_in() {
        let yesterday = today() - Duration::days(1);
        assert_eq!(
            validate_check_out(None, Some(yesterday), today()),
            Err(StayRule::CheckOutInPast)
        );
        assert_eq!(
            validate_check_out(None, Some(today()), today()),
            Ok(today())
        );
    }

    #[test]
    fn editing_check_in_revalidates_check_out() {
        let in_three_days = today() + Duration::days(3);
        let mut d = draft(today(), today() + Duration::days(2), 1, 1);
        assert_eq!(d.validate_field(StayField::CheckOut, today()), None);

        d.check_in = Some(in_three_days);
        assert_eq!(
            d.validate_field(StayField::CheckOut, today()),
            Some(StayRule::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn parse_count_is_lenient() {
        assert_eq!(parse_count("3"), 3);
        assert_eq!(parse_count(" 2 "), 2);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("-1"), 0);
        assert_eq!(parse_count("NaN"), 0);
        assert_eq!(parse_count("inf"), 0);
    }

    #[test]
    fn parse_count_accepts_browser_numbers() {
        assert_eq!(parse_count("2.0"), 2);
        assert_eq!(parse_count("1e1"), 10);
        assert_eq!(parse_count("+3"), 3);
        assert_eq!(parse_count("1.5"), 1);
        assert_eq!(parse_count("0.5"), 0);
        assert_eq!(parse_count("5000000000"), u32::MAX);
        assert_eq!(validate_guests(parse_count("2.0")), Ok(2));
        assert!(validate_rooms(parse_count("5000000000")).is_ok());
    }

    #[test]
    fn errors_convert_to_app_error_with_field_keys() {
        let errors = StayDraft {
            guests: 0,
            ..StayDraft::default()
        }
        .validate(today())
        .unwrap_err();
        let app_error: AppError = errors.into();

        assert_eq!(app_error.kind, AppErrorKind::ValidationError);
        assert_eq!(
            app_error.field_errors.get("checkIn").unwrap(),
            "Check-in date is required"
        );
        assert_eq!(
            app_error.field_errors.get("checkOut").unwrap(),
            "Check-out date is required"
        );
        assert_eq!(app_error.field_errors.get("guests").unwrap(), "Minimum 1 guest");
        assert!(!app_error.field_errors.contains_key("rooms"));
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let request = StayRequest {
            check_in: today(),
            check_out: today() + Duration::days(2),
            guests: 2,
            rooms: 1,
        };
        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["checkIn"], "2026-10-19");
        assert_eq!(json["checkOut"], "2026-10-21");
        assert_eq!(json["guests"], 2);
    }
}
