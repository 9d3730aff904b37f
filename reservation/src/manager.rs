use abi::{
    nights_between, validate_contact, validate_stay, Booking, BookingConflict, BookingDetails, BookingId,
    BookingRequest, Customer, CustomerId, HotelConfig, IdSequence, ReservationError, Room,
    RoomNumber, StayRange, StayWindow, Validator,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{ReservationManager, Rsvp};

impl Rsvp for ReservationManager {
    fn add_room(&mut self, room: Room) {
        debug!(room = room.room_number, room_type = %room.room_type, "room added");
        self.rooms.push(room);
    }

    fn remove_room(&mut self, room_number: RoomNumber) -> bool {
        match self
            .rooms
            .iter()
            .position(|room| room.room_number == room_number)
        {
            Some(pos) => {
                self.rooms.remove(pos);
                debug!(room = room_number, "room removed");
                true
            }
            None => false,
        }
    }

    fn add_customer(&mut self, customer: Customer) {
        debug!(customer = customer.id(), "customer added");
        self.customers.push(customer);
    }

    fn add_booking(&mut self, mut booking: Booking) -> bool {
        match self.room(booking.room_number) {
            Some(room) => {
                if let Err(e) = booking.try_calculate_total_price(room) {
                    warn!(booking = booking.id(), error = %e, "could not price booking");
                }
            }
            None => warn!(
                booking = booking.id(),
                room = booking.room_number,
                "booking references an unknown room, price left unchanged"
            ),
        }

        debug!(booking = booking.id(), total = %booking.total_price(), "booking added");
        self.bookings.push(booking);
        true
    }

    fn cancel_booking(&mut self, id: BookingId) -> bool {
        match self.bookings.iter().position(|booking| booking.id() == id) {
            Some(pos) => {
                self.bookings.remove(pos);
                info!(booking = id, "booking cancelled");
                true
            }
            None => false,
        }
    }

    fn search_available_rooms(&self, room_type: &str) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.is_type(room_type) && room.available)
            .collect()
    }

    fn search_bookings_by_customer_name(&self, name: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|booking| {
                self.customer(booking.customer_id)
                    .is_some_and(|customer| customer.name == name)
            })
            .collect()
    }

    fn search_booking_by_id(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|booking| booking.id() == id)
    }

    fn is_room_available_for_dates(
        &self,
        room_number: RoomNumber,
        check_in: &str,
        check_out: &str,
    ) -> bool {
        match StayRange::parse(check_in, check_out) {
            Ok(requested) => self.find_conflict(room_number, &requested).is_none(),
            Err(e) => {
                debug!(room = room_number, error = %e, "unparsable stay treated as free");
                true
            }
        }
    }
}

impl ReservationManager {
    pub fn new(
        rooms: Vec<Room>,
        customer_ids: IdSequence,
        booking_ids: IdSequence,
    ) -> Self {
        Self {
            rooms,
            customers: Vec::new(),
            bookings: Vec::new(),
            customer_ids,
            booking_ids,
        }
    }

    pub fn from_config(config: &HotelConfig) -> Self {
        Self::new(
            config.rooms.clone(),
            IdSequence::starting_after(config.customer_id_offset),
            IdSequence::starting_after(config.booking_id_offset),
        )
    }

    pub fn all_rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn all_customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn all_bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn room(&self, room_number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_number == room_number)
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id() == id)
    }

    /// The flag is metadata only; availability for dates is derived from bookings.
    pub fn set_room_available(&mut self, room_number: RoomNumber, available: bool) -> bool {
        match self
            .rooms
            .iter_mut()
            .find(|room| room.room_number == room_number)
        {
            Some(room) => {
                room.available = available;
                true
            }
            None => false,
        }
    }

    /// Allocate a customer id. The record is not stored.
    pub fn create_customer(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Customer {
        Customer::new(self.customer_ids.next_id(), name, email, phone)
    }

    /// Allocate a booking id. The record is not stored or priced.
    pub fn create_booking(
        &mut self,
        customer_id: CustomerId,
        room_number: RoomNumber,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Booking {
        Booking::new(
            self.booking_ids.next_id(),
            customer_id,
            room_number,
            check_in,
            check_out,
        )
    }

    /// Price preview; 0 for an unknown room, malformed dates or an out of range total.
    pub fn quote_price(&self, room_number: RoomNumber, check_in: &str, check_out: &str) -> Decimal {
        let Some(room) = self.room(room_number) else {
            return Decimal::ZERO;
        };

        match nights_between(check_in, check_out).and_then(|nights| room.price_for(nights)) {
            Ok(price) => price,
            Err(e) => {
                debug!(room = room_number, error = %e, "stay could not be quoted");
                Decimal::ZERO
            }
        }
    }

    /// Like [`Rsvp::is_room_available_for_dates`] but a malformed request is an error.
    /// Existing bookings with malformed dates still never conflict.
    pub fn try_is_room_available_for_dates(
        &self,
        room_number: RoomNumber,
        check_in: &str,
        check_out: &str,
    ) -> Result<bool, ReservationError> {
        let requested = StayRange::parse(check_in, check_out)?;
        Ok(self.find_conflict(room_number, &requested).is_none())
    }

    /// Validate the form input, check the room is free and store the booking
    /// together with a new customer.
    pub fn book(&mut self, request: BookingRequest) -> Result<Booking, ReservationError> {
        let request = request.trimmed();
        request.validate()?;
        validate_contact(&request.name, &request.email, &request.phone)?;

        let room = self
            .room(request.room_number)
            .ok_or(ReservationError::RoomNotFound(request.room_number))?;

        let stay = validate_stay(&request.check_in, &request.check_out)?;
        if let Some(existing) = self.find_conflict(request.room_number, &stay) {
            return Err(ReservationError::ConflictBooking(BookingConflict {
                existing_id: existing.id(),
                new: StayWindow::new(request.room_number, &request.check_in, &request.check_out),
                old: existing.window(),
            }));
        }
        room.price_for(stay.nights())?;

        let customer = self.create_customer(request.name, request.email, request.phone);
        let booking = self.create_booking(
            customer.id(),
            request.room_number,
            request.check_in,
            request.check_out,
        );
        let id = booking.id();

        self.add_booking(booking);
        self.add_customer(customer);
        info!(booking = id, room = request.room_number, "booking confirmed");

        self.search_booking_by_id(id)
            .cloned()
            .ok_or(ReservationError::BookingNotFound(id))
    }

    pub fn booking_details(&self, id: BookingId) -> Option<BookingDetails> {
        self.search_booking_by_id(id).map(|booking| self.details(booking))
    }

    pub fn all_booking_details(&self) -> Vec<BookingDetails> {
        self.bookings.iter().map(|booking| self.details(booking)).collect()
    }

    pub fn details(&self, booking: &Booking) -> BookingDetails {
        BookingDetails {
            booking_id: booking.id(),
            customer_name: self
                .customer(booking.customer_id)
                .map(|customer| customer.name.clone()),
            room_number: booking.room_number,
            room_type: self
                .room(booking.room_number)
                .map(|room| room.room_type.clone()),
            check_in: booking.check_in.clone(),
            check_out: booking.check_out.clone(),
            total_price: booking.total_price(),
        }
    }

    /// first booking of the room overlapping `requested`; unparsable bookings never match
    fn find_conflict(&self, room_number: RoomNumber, requested: &StayRange) -> Option<&Booking> {
        self.bookings
            .iter()
            .filter(|booking| booking.room_number == room_number)
            .find(|booking| {
                booking
                    .stay()
                    .map(|stay| requested.overlaps(&stay))
                    .unwrap_or(false)
            })
    }
}

impl Default for ReservationManager {
    fn default() -> Self {
        Self::from_config(&HotelConfig::default())
    }
}
