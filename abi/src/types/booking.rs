use std::fmt;

use rust_decimal::Decimal;

use crate::{
    BookingId, CustomerId, ReservationError, Room, RoomNumber, StayRange, StayWindow, Validator,
};

/// A stay of one customer in one room. Customer and room are referenced by
/// key; the manager owns the records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    id: BookingId,
    pub customer_id: CustomerId,
    pub room_number: RoomNumber,
    pub check_in: String,
    pub check_out: String,
    total_price: Decimal,
}

impl Booking {
    pub fn new(
        id: BookingId,
        customer_id: CustomerId,
        room_number: RoomNumber,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        Self {
            id,
            customer_id,
            room_number,
            check_in: check_in.into(),
            check_out: check_out.into(),
            total_price: Decimal::ZERO,
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn stay(&self) -> Result<StayRange, ReservationError> {
        StayRange::parse(&self.check_in, &self.check_out)
    }

    pub fn window(&self) -> StayWindow {
        StayWindow::new(self.room_number, &self.check_in, &self.check_out)
    }

    /// Recompute the price from `room`. The stored price is left untouched on error.
    pub fn try_calculate_total_price(&mut self, room: &Room) -> Result<Decimal, ReservationError> {
        self.total_price = room.price_for(self.stay()?.nights())?;
        Ok(self.total_price)
    }

    /// Same as [`Booking::try_calculate_total_price`] but any failure yields 0.
    pub fn calculate_total_price(&mut self, room: &Room) -> Decimal {
        self.try_calculate_total_price(room).unwrap_or(Decimal::ZERO)
    }
}

/// Raw input of the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_number: RoomNumber,
    pub check_in: String,
    pub check_out: String,
}

impl BookingRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        room_number: RoomNumber,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            room_number,
            check_in: check_in.into(),
            check_out: check_out.into(),
        }
    }

    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            room_number: self.room_number,
            check_in: self.check_in.trim().to_string(),
            check_out: self.check_out.trim().to_string(),
        }
    }
}

impl Validator for BookingRequest {
    /// every text field must be non-empty
    fn validate(&self) -> Result<(), ReservationError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("check_in", &self.check_in),
            ("check_out", &self.check_out),
        ];

        match fields.iter().find(|(_, v)| v.is_empty()) {
            Some((field, _)) => Err(ReservationError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

/// A booking joined with its customer and room, as listed to the front desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub booking_id: BookingId,
    pub customer_name: Option<String>,
    pub room_number: RoomNumber,
    pub room_type: Option<String>,
    pub check_in: String,
    pub check_out: String,
    pub total_price: Decimal,
}

impl fmt::Display for BookingDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking ID: {}, Customer: {}, Room: {} ({}), Check-In: {}, Check-Out: {}, Total: ${:.2}",
            self.booking_id,
            self.customer_name.as_deref().unwrap_or("unknown"),
            self.room_number,
            self.room_type.as_deref().unwrap_or("unknown"),
            self.check_in,
            self.check_out,
            self.total_price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_room() -> Room {
        Room::new(101, "Single", Decimal::from(100))
    }

    #[test]
    fn two_nights_should_cost_twice_the_rate() {
        let mut booking = Booking::new(5001, 1001, 101, "01/01/2024", "03/01/2024");
        assert_eq!(booking.total_price(), Decimal::ZERO);
        assert_eq!(booking.calculate_total_price(&single_room()), Decimal::from(200));
        assert_eq!(booking.total_price(), Decimal::from(200));
    }

    #[test]
    fn same_day_stay_should_cost_one_night() {
        let mut booking = Booking::new(5001, 1001, 101, "01/01/2024", "01/01/2024");
        assert_eq!(booking.calculate_total_price(&single_room()), Decimal::from(100));
    }

    #[test]
    fn fractional_rate_should_be_exact() {
        let room = Room::new(102, "Single", Decimal::new(9999, 2));
        let mut booking = Booking::new(5001, 1001, 102, "01/01/2024", "04/01/2024");
        assert_eq!(booking.calculate_total_price(&room), Decimal::new(29997, 2));
    }

    #[test]
    fn malformed_dates_should_price_at_zero() {
        let room = single_room();
        let mut booking = Booking::new(5001, 1001, 101, "01/01/2024", "03/01/2024");
        booking.calculate_total_price(&room);

        booking.check_out = "3rd of Jan".to_string();
        assert_eq!(booking.calculate_total_price(&room), Decimal::ZERO);
        assert_eq!(
            booking.try_calculate_total_price(&room),
            Err(ReservationError::InvalidDateFormat("3rd of Jan".to_string()))
        );
        assert_eq!(booking.total_price(), Decimal::from(200));
    }

    #[test]
    fn overflowing_price_should_price_at_zero() {
        let room = Room::new(401, "Suite", Decimal::MAX);
        let mut booking = Booking::new(5001, 1001, 401, "01/01/2024", "01/01/2024");
        assert_eq!(booking.calculate_total_price(&room), Decimal::MAX);

        booking.check_out = "03/01/2024".to_string();
        assert_eq!(booking.calculate_total_price(&room), Decimal::ZERO);
        assert_eq!(
            booking.try_calculate_total_price(&room),
            Err(ReservationError::PriceOverflow {
                room_number: 401,
                nights: 2,
            })
        );
        assert_eq!(booking.total_price(), Decimal::MAX);
    }

    #[test]
    fn request_validation_should_name_missing_field() {
        let request =
            BookingRequest::new(" Ada ", "ada@example.com", "  ", 101, "01/01/2024", "03/01/2024")
                .trimmed();
        assert_eq!(request.name, "Ada");
        assert_eq!(request.validate(), Err(ReservationError::MissingField("phone")));
    }

    #[test]
    fn details_display_should_work() {
        let details = BookingDetails {
            booking_id: 5001,
            customer_name: Some("Ada".to_string()),
            room_number: 101,
            room_type: Some("Single".to_string()),
            check_in: "01/01/2024".to_string(),
            check_out: "03/01/2024".to_string(),
            total_price: Decimal::from(200),
        };
        assert_eq!(
            details.to_string(),
            "Booking ID: 5001, Customer: Ada, Room: 101 (Single), Check-In: 01/01/2024, Check-Out: 03/01/2024, Total: $200.00"
        );
    }
}
