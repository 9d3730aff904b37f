use abi::{Booking, BookingId, Customer, IdSequence, Room, RoomNumber};

mod manager;

/// In-memory front desk: rooms, customers and bookings in insertion order.
#[derive(Debug, Clone)]
pub struct ReservationManager {
    rooms: Vec<Room>,
    customers: Vec<Customer>,
    bookings: Vec<Booking>,
    customer_ids: IdSequence,
    booking_ids: IdSequence,
}

/// Operations never fail; misses are reported as `false` or `None`.
pub trait Rsvp {
    /// add a room, duplicate numbers are not checked
    fn add_room(&mut self, room: Room);
    /// remove the first room with this number
    fn remove_room(&mut self, room_number: RoomNumber) -> bool;
    fn add_customer(&mut self, customer: Customer);
    /// price the booking against its room and store it
    fn add_booking(&mut self, booking: Booking) -> bool;
    /// remove the first booking with this id
    fn cancel_booking(&mut self, id: BookingId) -> bool;
    /// rooms of exactly this type whose available flag is set
    fn search_available_rooms(&self, room_type: &str) -> Vec<&Room>;
    /// bookings whose customer has exactly this name
    fn search_bookings_by_customer_name(&self, name: &str) -> Vec<&Booking>;
    fn search_booking_by_id(&self, id: BookingId) -> Option<&Booking>;
    /// false if any booking of the room overlaps `[check_in, check_out)`
    fn is_room_available_for_dates(
        &self,
        room_number: RoomNumber,
        check_in: &str,
        check_out: &str,
    ) -> bool;
}
