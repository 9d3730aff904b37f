use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ReservationError, RoomNumber};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_number: RoomNumber,
    pub room_type: String,
    pub price_per_night: Decimal,
    /// informational only, bookings never update it
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Room {
    pub fn new(
        room_number: RoomNumber,
        room_type: impl Into<String>,
        price_per_night: Decimal,
    ) -> Self {
        Self {
            room_number,
            room_type: room_type.into(),
            price_per_night,
            available: true,
        }
    }

    pub fn is_type(&self, room_type: &str) -> bool {
        self.room_type == room_type
    }

    /// `nights` times the nightly rate, or `PriceOverflow` past the decimal range.
    pub fn price_for(&self, nights: i64) -> Result<Decimal, ReservationError> {
        self.price_per_night
            .checked_mul(Decimal::from(nights))
            .ok_or(ReservationError::PriceOverflow {
                room_number: self.room_number,
                nights,
            })
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} ({}) - ${:.2}/night - {}",
            self.room_number,
            self.room_type,
            self.price_per_night,
            if self.available {
                "Available"
            } else {
                "Unavailable"
            }
        )
    }
}
