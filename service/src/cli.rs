//! Line oriented front desk commands, one per line.

use std::str::FromStr;

use abi::{BookingId, BookingRequest, ReservationError, Room, RoomNumber, RoomType};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::ReservationService;

pub const HELP: &str = "\
rooms [TYPE]                          list rooms, or available rooms of TYPE
add-room NUMBER TYPE PRICE            register a room
remove-room NUMBER                    remove a room
set-available NUMBER true|false       set the room availability flag
book NAME|EMAIL|PHONE|ROOM|IN|OUT     confirm a booking, dates as DD/MM/YYYY
quote ROOM IN OUT                     price a stay
cancel ID                             cancel a booking
find ID                               show a booking
find-name NAME                        bookings of a customer, case-sensitive
available ROOM IN OUT                 check a room for a date range
bookings                              list bookings
customers                             list customers
help                                  show this text
quit                                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Rooms(Option<String>),
    AddRoom(Room),
    RemoveRoom(RoomNumber),
    SetAvailable(RoomNumber, bool),
    Book(BookingRequest),
    Quote(RoomNumber, String, String),
    Cancel(BookingId),
    Find(BookingId),
    FindName(String),
    Available(RoomNumber, String, String),
    Bookings,
    Customers,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}, try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match (name, args.as_slice()) {
            ("rooms", []) => Command::Rooms(None),
            ("rooms", [room_type]) => Command::Rooms(Some(room_type.to_string())),
            ("rooms", _) => return Err(CommandError::Usage("rooms [TYPE]")),

            ("add-room", [number, room_type, price]) => {
                let price = parse_price(price)?;
                Command::AddRoom(Room::new(parse_number(number)?, *room_type, price))
            }
            ("add-room", _) => return Err(CommandError::Usage("add-room NUMBER TYPE PRICE")),

            ("remove-room", [number]) => Command::RemoveRoom(parse_number(number)?),
            ("remove-room", _) => return Err(CommandError::Usage("remove-room NUMBER")),

            ("set-available", [number, flag]) => {
                let flag = flag
                    .parse::<bool>()
                    .map_err(|_| CommandError::Usage("set-available NUMBER true|false"))?;
                Command::SetAvailable(parse_number(number)?, flag)
            }
            ("set-available", _) => {
                return Err(CommandError::Usage("set-available NUMBER true|false"))
            }

            ("book", _) => Command::Book(parse_booking(rest)?),

            ("quote", [room, check_in, check_out]) => Command::Quote(
                parse_number(room)?,
                check_in.to_string(),
                check_out.to_string(),
            ),
            ("quote", _) => return Err(CommandError::Usage("quote ROOM IN OUT")),

            ("cancel", [id]) => Command::Cancel(parse_number(id)?),
            ("cancel", _) => return Err(CommandError::Usage("cancel ID")),

            ("find", [id]) => Command::Find(parse_number(id)?),
            ("find", _) => return Err(CommandError::Usage("find ID")),

            ("find-name", [_, ..]) => Command::FindName(rest.to_string()),
            ("find-name", []) => return Err(CommandError::Usage("find-name NAME")),

            ("available", [room, check_in, check_out]) => Command::Available(
                parse_number(room)?,
                check_in.to_string(),
                check_out.to_string(),
            ),
            ("available", _) => return Err(CommandError::Usage("available ROOM IN OUT")),

            ("bookings", []) => Command::Bookings,
            ("customers", []) => Command::Customers,
            ("help", _) => Command::Help,
            ("quit" | "exit", _) => Command::Quit,
            (name, _) => return Err(CommandError::Unknown(name.to_string())),
        };

        Ok(command)
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, CommandError> {
    s.parse().map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

fn parse_price(s: &str) -> Result<Decimal, CommandError> {
    match s.parse::<Decimal>() {
        Ok(price) if !price.is_sign_negative() => Ok(price),
        _ => Err(CommandError::InvalidNumber(s.to_string())),
    }
}

/// `NAME|EMAIL|PHONE|ROOM|IN|OUT`, fields are trimmed later by the manager
fn parse_booking(rest: &str) -> Result<BookingRequest, CommandError> {
    const USAGE: &str = "book NAME|EMAIL|PHONE|ROOM|IN|OUT";

    let fields: Vec<&str> = rest.split('|').collect();
    let [name, email, phone, room, check_in, check_out] = fields.as_slice() else {
        return Err(CommandError::Usage(USAGE));
    };

    Ok(BookingRequest::new(
        *name,
        *email,
        *phone,
        parse_number(room.trim())?,
        *check_in,
        *check_out,
    ))
}

fn lines_or<T: ToString>(items: &[T], empty: impl Into<String>) -> String {
    if items.is_empty() {
        return empty.into();
    }

    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run one command and render its result as text.
pub async fn execute<S>(service: &S, command: Command) -> Result<String, ReservationError>
where
    S: ReservationService + ?Sized,
{
    let output = match command {
        Command::Rooms(None) => lines_or(&service.rooms(None).await, "no rooms"),
        Command::Rooms(Some(room_type)) => lines_or(
            &service.rooms(Some(room_type.as_str())).await,
            format!(
                "no available rooms of type {room_type}, known types: {}",
                RoomType::ALL.map(|t| t.as_str()).join(", ")
            ),
        ),
        Command::AddRoom(room) => {
            let text = format!("added {room}");
            service.add_room(room).await;
            text
        }
        Command::RemoveRoom(room_number) => {
            service.remove_room(room_number).await?;
            format!("room {room_number} removed")
        }
        Command::SetAvailable(room_number, available) => {
            service.set_room_available(room_number, available).await?;
            format!("room {room_number} available: {available}")
        }
        Command::Book(request) => {
            let details = service.reserve(request).await?;
            format!("booking confirmed: {details}")
        }
        Command::Quote(room_number, check_in, check_out) => {
            let price = service.quote(room_number, &check_in, &check_out).await;
            format!("Total Price: ${price:.2}")
        }
        Command::Cancel(id) => {
            service.cancel(id).await?;
            format!("booking {id} cancelled")
        }
        Command::Find(id) => service.get(id).await?.to_string(),
        Command::FindName(name) => lines_or(
            &service.query(&name).await,
            format!("no bookings found for customer: {name}"),
        ),
        Command::Available(room_number, check_in, check_out) => {
            if service
                .check_availability(room_number, &check_in, &check_out)
                .await
            {
                format!("room {room_number} is available from {check_in} to {check_out}")
            } else {
                format!("room {room_number} is not available from {check_in} to {check_out}")
            }
        }
        Command::Bookings => lines_or(&service.bookings().await, "no bookings"),
        Command::Customers => lines_or(&service.customers().await, "no customers"),
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use reservation::ReservationManager;

    use super::*;
    use crate::RsvpService;

    #[test]
    fn parse_commands_should_work() {
        assert_eq!("rooms".parse::<Command>(), Ok(Command::Rooms(None)));
        assert_eq!(
            "  rooms Suite ".parse::<Command>(),
            Ok(Command::Rooms(Some("Suite".to_string())))
        );
        assert_eq!(
            "add-room 401 Suite 320.50".parse::<Command>(),
            Ok(Command::AddRoom(Room::new(401, "Suite", Decimal::new(32050, 2))))
        );
        assert_eq!(
            "set-available 101 false".parse::<Command>(),
            Ok(Command::SetAvailable(101, false))
        );
        assert_eq!(
            "find-name Ada Lovelace".parse::<Command>(),
            Ok(Command::FindName("Ada Lovelace".to_string()))
        );
        assert_eq!(
            "book Ada Lovelace|ada@example.com|0123456789| 101 |01/01/2024|03/01/2024".parse::<Command>(),
            Ok(Command::Book(BookingRequest::new(
                "Ada Lovelace",
                "ada@example.com",
                "0123456789",
                101,
                "01/01/2024",
                "03/01/2024",
            )))
        );
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parse_errors_should_be_reported() {
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "checkin".parse::<Command>(),
            Err(CommandError::Unknown("checkin".to_string()))
        );
        assert_eq!(
            "cancel".parse::<Command>(),
            Err(CommandError::Usage("cancel ID"))
        );
        assert_eq!(
            "cancel five".parse::<Command>(),
            Err(CommandError::InvalidNumber("five".to_string()))
        );
        assert_eq!(
            "add-room 401 Suite -3".parse::<Command>(),
            Err(CommandError::InvalidNumber("-3".to_string()))
        );
        assert_eq!(
            "book Ada|ada@example.com|0123456789".parse::<Command>(),
            Err(CommandError::Usage("book NAME|EMAIL|PHONE|ROOM|IN|OUT"))
        );
    }

    #[tokio::test]
    async fn execute_should_render_results() {
        let service = RsvpService::new(ReservationManager::default());

        let run = |line: &str| line.parse::<Command>().unwrap();

        let output = execute(
            &service,
            run("book Ada|ada@example.com|0123456789|101|01/01/2024|03/01/2024"),
        )
        .await
        .unwrap();
        assert_eq!(
            output,
            "booking confirmed: Booking ID: 5001, Customer: Ada, Room: 101 (Single), Check-In: 01/01/2024, Check-Out: 03/01/2024, Total: $200.00"
        );

        assert_eq!(
            execute(&service, run("quote 301 01/01/2024 01/01/2024"))
                .await
                .unwrap(),
            "Total Price: $250.00"
        );
        assert_eq!(
            execute(&service, run("available 101 02/01/2024 04/01/2024"))
                .await
                .unwrap(),
            "room 101 is not available from 02/01/2024 to 04/01/2024"
        );
        assert_eq!(
            execute(&service, run("rooms Penthouse")).await.unwrap(),
            "no available rooms of type Penthouse, known types: Single, Double, Suite"
        );
        assert_eq!(
            execute(&service, run("find-name ada")).await.unwrap(),
            "no bookings found for customer: ada"
        );
        assert_eq!(
            execute(&service, run("cancel 4242")).await,
            Err(ReservationError::BookingNotFound(4242))
        );
        assert_eq!(
            execute(&service, run("cancel 5001")).await.unwrap(),
            "booking 5001 cancelled"
        );
        assert_eq!(
            execute(&service, run("bookings")).await.unwrap(),
            "no bookings"
        );
    }
}
