pub mod cli;
mod service;

use abi::{
    BookingDetails, BookingId, BookingRequest, Customer, LogConfig, ReservationError, Room,
    RoomNumber,
};
use reservation::ReservationManager;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// One manager shared by every caller; each operation holds the lock for its whole run.
pub struct RsvpService {
    manager: Mutex<ReservationManager>,
}

#[async_trait::async_trait]
pub trait ReservationService {
    /// validate and confirm a booking
    async fn reserve(&self, request: BookingRequest) -> Result<BookingDetails, ReservationError>;
    /// cancel a booking by id
    async fn cancel(&self, id: BookingId) -> Result<(), ReservationError>;
    /// get a booking by id
    async fn get(&self, id: BookingId) -> Result<BookingDetails, ReservationError>;
    /// bookings of the customer with exactly this name
    async fn query(&self, customer_name: &str) -> Vec<BookingDetails>;
    async fn bookings(&self) -> Vec<BookingDetails>;
    async fn customers(&self) -> Vec<Customer>;
    /// every room, or the available rooms of one type
    async fn rooms(&self, room_type: Option<&str>) -> Vec<Room>;
    async fn add_room(&self, room: Room);
    async fn remove_room(&self, room_number: RoomNumber) -> Result<(), ReservationError>;
    async fn set_room_available(
        &self,
        room_number: RoomNumber,
        available: bool,
    ) -> Result<(), ReservationError>;
    /// price preview, 0 when it cannot be computed
    async fn quote(&self, room_number: RoomNumber, check_in: &str, check_out: &str) -> Decimal;
    async fn check_availability(
        &self,
        room_number: RoomNumber,
        check_in: &str,
        check_out: &str,
    ) -> bool;
}

/// `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
