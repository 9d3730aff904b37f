use abi::{
    BookingDetails, BookingId, BookingRequest, Config, Customer, ReservationError, Room,
    RoomNumber,
};
use reservation::{ReservationManager, Rsvp};
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing::info;

use crate::{ReservationService, RsvpService};

impl RsvpService {
    pub fn new(manager: ReservationManager) -> Self {
        Self {
            manager: Mutex::new(manager),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        info!(
            rooms = config.hotel.rooms.len(),
            customer_id_offset = config.hotel.customer_id_offset,
            booking_id_offset = config.hotel.booking_id_offset,
            "loading hotel"
        );
        Self::new(ReservationManager::from_config(&config.hotel))
    }
}

#[async_trait::async_trait]
impl ReservationService for RsvpService {
    async fn reserve(&self, request: BookingRequest) -> Result<BookingDetails, ReservationError> {
        let mut manager = self.manager.lock().await;
        let booking = manager.book(request)?;
        Ok(manager.details(&booking))
    }

    async fn cancel(&self, id: BookingId) -> Result<(), ReservationError> {
        if self.manager.lock().await.cancel_booking(id) {
            Ok(())
        } else {
            Err(ReservationError::BookingNotFound(id))
        }
    }

    async fn get(&self, id: BookingId) -> Result<BookingDetails, ReservationError> {
        self.manager
            .lock()
            .await
            .booking_details(id)
            .ok_or(ReservationError::BookingNotFound(id))
    }

    async fn query(&self, customer_name: &str) -> Vec<BookingDetails> {
        let manager = self.manager.lock().await;
        manager
            .search_bookings_by_customer_name(customer_name)
            .into_iter()
            .map(|booking| manager.details(booking))
            .collect()
    }

    async fn bookings(&self) -> Vec<BookingDetails> {
        self.manager.lock().await.all_booking_details()
    }

    async fn customers(&self) -> Vec<Customer> {
        self.manager.lock().await.all_customers().to_vec()
    }

    async fn rooms(&self, room_type: Option<&str>) -> Vec<Room> {
        let manager = self.manager.lock().await;
        match room_type {
            Some(room_type) => manager
                .search_available_rooms(room_type)
                .into_iter()
                .cloned()
                .collect(),
            None => manager.all_rooms().to_vec(),
        }
    }

    async fn add_room(&self, room: Room) {
        self.manager.lock().await.add_room(room);
    }

    async fn remove_room(&self, room_number: RoomNumber) -> Result<(), ReservationError> {
        if self.manager.lock().await.remove_room(room_number) {
            Ok(())
        } else {
            Err(ReservationError::RoomNotFound(room_number))
        }
    }

    async fn set_room_available(
        &self,
        room_number: RoomNumber,
        available: bool,
    ) -> Result<(), ReservationError> {
        if self
            .manager
            .lock()
            .await
            .set_room_available(room_number, available)
        {
            Ok(())
        } else {
            Err(ReservationError::RoomNotFound(room_number))
        }
    }

    async fn quote(&self, room_number: RoomNumber, check_in: &str, check_out: &str) -> Decimal {
        self.manager
            .lock()
            .await
            .quote_price(room_number, check_in, check_out)
    }

    async fn check_availability(
        &self,
        room_number: RoomNumber,
        check_in: &str,
        check_out: &str,
    ) -> bool {
        self.manager
            .lock()
            .await
            .is_room_available_for_dates(room_number, check_in, check_out)
    }
}
