mod booking;
mod customer;
mod room;
mod room_type;
mod stay_date;

pub use booking::*;
pub use customer::*;
pub use room::*;
pub use room_type::*;
pub use stay_date::*;
