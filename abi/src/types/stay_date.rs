use std::{fmt, ops::Range, str::FromStr};

use crate::ReservationError;

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;
const DATE_LEN: usize = 10;

/// A `DD/MM/YYYY` date on the simplified hotel clock: every month has 30 days,
/// every year 365. Field values are not range checked, so `31/02/2024` parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDate {
    day: i32,
    month: i32,
    year: i32,
}

impl StayDate {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `year*365 + month*30 + day`
    pub fn linear_days(&self) -> i64 {
        self.year as i64 * DAYS_PER_YEAR + self.month as i64 * DAYS_PER_MONTH + self.day as i64
    }
}

impl FromStr for StayDate {
    type Err = ReservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReservationError::InvalidDateFormat(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != DATE_LEN || bytes[2] != b'/' || bytes[5] != b'/' {
            return Err(invalid());
        }

        Ok(Self {
            day: parse_field(s, 0..2).ok_or_else(invalid)?,
            month: parse_field(s, 3..5).ok_or_else(invalid)?,
            year: parse_field(s, 6..10).ok_or_else(invalid)?,
        })
    }
}

impl fmt::Display for StayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

fn parse_field(s: &str, range: Range<usize>) -> Option<i32> {
    s.get(range)?.parse().ok()
}

/// A check-in/check-out pair. The interval is half-open: the check-out day is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    pub check_in: StayDate,
    pub check_out: StayDate,
}

impl StayRange {
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, ReservationError> {
        Ok(Self {
            check_in: check_in.parse()?,
            check_out: check_out.parse()?,
        })
    }

    /// Nights billed for the stay, never fewer than one.
    pub fn nights(&self) -> i64 {
        (self.check_out.linear_days() - self.check_in.linear_days()).max(1)
    }

    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in.linear_days() < other.check_out.linear_days()
            && self.check_out.linear_days() > other.check_in.linear_days()
    }
}

pub fn nights_between(check_in: &str, check_out: &str) -> Result<i64, ReservationError> {
    Ok(StayRange::parse(check_in, check_out)?.nights())
}

pub fn is_valid_date_format(date: &str) -> bool {
    date.parse::<StayDate>().is_ok()
}

/// Parse both dates and require check-out strictly after check-in.
pub fn validate_stay(check_in: &str, check_out: &str) -> Result<StayRange, ReservationError> {
    let range = StayRange::parse(check_in, check_out)?;

    if range.check_out.linear_days() <= range.check_in.linear_days() {
        return Err(ReservationError::InvalidStayRange {
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        });
    }

    Ok(range)
}

/// false when either date is malformed
pub fn is_check_out_after_check_in(check_in: &str, check_out: &str) -> bool {
    validate_stay(check_in, check_out).is_ok()
}
