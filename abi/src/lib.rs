mod config;
mod error;
mod id;
mod types;

pub use config::*;
pub use error::*;
pub use id::*;
pub use types::*;

pub type RoomNumber = i32;
pub type CustomerId = i64;
pub type BookingId = i64;

/// validate the data structure, raise error if invalid
pub trait Validator {
    fn validate(&self) -> Result<(), ReservationError>;
}
