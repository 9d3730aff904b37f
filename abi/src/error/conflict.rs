use std::fmt;

use crate::{BookingId, RoomNumber};

/// The requested stay and the first existing booking it collides with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConflict {
    pub existing_id: BookingId,
    pub new: StayWindow,
    pub old: StayWindow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayWindow {
    pub room_number: RoomNumber,
    pub check_in: String,
    pub check_out: String,
}

impl StayWindow {
    pub fn new(
        room_number: RoomNumber,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        Self {
            room_number,
            check_in: check_in.into(),
            check_out: check_out.into(),
        }
    }
}

impl fmt::Display for StayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {} [{}, {})",
            self.room_number, self.check_in, self.check_out
        )
    }
}

impl fmt::Display for BookingConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} conflicts with booking {} {}",
            self.new, self.existing_id, self.old
        )
    }
}
