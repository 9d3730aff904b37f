mod conflict;

use thiserror::Error;

pub use conflict::*;

use crate::{BookingId, RoomNumber};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("invalid customer name: {0:?}")]
    InvalidName(String),

    #[error("invalid email: {0:?}")]
    InvalidEmail(String),

    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid date, expected DD/MM/YYYY: {0:?}")]
    InvalidDateFormat(String),

    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidStayRange { check_in: String, check_out: String },

    #[error("price of {nights} nights in room {room_number} is out of range")]
    PriceOverflow { room_number: RoomNumber, nights: i64 },

    #[error("room not found: {0}")]
    RoomNotFound(RoomNumber),

    #[error("booking not found: {0}")]
    BookingNotFound(BookingId),

    #[error("booking conflict: {0}")]
    ConflictBooking(BookingConflict),
}
