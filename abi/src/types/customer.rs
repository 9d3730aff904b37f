use std::fmt;

use crate::{CustomerId, ReservationError, Validator};

/// A hotel guest. Construction never validates; call the `validate_*` checks
/// (or [`Validator::validate`]) before trusting the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn validate_name(&self) -> bool {
        validate_name(&self.name)
    }

    pub fn validate_email(&self) -> bool {
        validate_email(&self.email)
    }

    pub fn validate_phone_number(&self) -> bool {
        validate_phone_number(&self.phone)
    }
}

/// At least two characters, ASCII letters and whitespace only. No trimming.
pub fn validate_name(name: &str) -> bool {
    name.chars().count() >= 2
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}

pub fn validate_email(email: &str) -> bool {
    email.contains('@')
}

/// Exactly ten ASCII digits.
pub fn validate_phone_number(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// checks name, email and phone in that order
pub fn validate_contact(name: &str, email: &str, phone: &str) -> Result<(), ReservationError> {
    if !validate_name(name) {
        return Err(ReservationError::InvalidName(name.to_string()));
    }

    if !validate_email(email) {
        return Err(ReservationError::InvalidEmail(email.to_string()));
    }

    if !validate_phone_number(phone) {
        return Err(ReservationError::InvalidPhone(phone.to_string()));
    }

    Ok(())
}

impl Validator for Customer {
    fn validate(&self) -> Result<(), ReservationError> {
        validate_contact(&self.name, &self.email, &self.phone)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer ID: {}, Name: {}, Email: {}, Phone: {}",
            self.id, self.name, self.email, self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validation_should_work() {
        assert!(validate_name("Jo"));
        assert!(validate_name("Ada Lovelace"));
        assert!(validate_name(" Ada "));
        assert!(!validate_name("J"));
        assert!(!validate_name(""));
        assert!(!validate_name("R2D2"));
        assert!(!validate_name("O'Brien"));
        assert!(!validate_name("José"));
    }

    #[test]
    fn email_validation_only_needs_at_sign() {
        assert!(validate_email("a@b"));
        assert!(validate_email("@"));
        assert!(!validate_email("ada.example.com"));
    }

    #[test]
    fn phone_validation_should_require_ten_digits() {
        assert!(validate_phone_number("0123456789"));
        assert!(!validate_phone_number("123456789"));
        assert!(!validate_phone_number("01234567890"));
        assert!(!validate_phone_number("+123456789"));
        assert!(!validate_phone_number("-123456789"));
        assert!(!validate_phone_number("01234 6789"));
    }

    #[test]
    fn construction_should_not_validate() {
        let customer = Customer::new(1001, "X", "nope", "12");
        assert_eq!(customer.id(), 1001);
        assert!(!customer.validate_name());
        assert!(!customer.validate_email());
        assert!(!customer.validate_phone_number());
    }

    #[test]
    fn validate_should_report_first_failure() {
        let customer = Customer::new(1001, "Ada", "ada.example.com", "12");
        assert_eq!(
            customer.validate(),
            Err(ReservationError::InvalidEmail("ada.example.com".to_string()))
        );

        let ok = Customer::new(1002, "Ada", "ada@example.com", "0123456789");
        assert_eq!(ok.validate(), Ok(()));
        assert_eq!(
            ok.to_string(),
            "Customer ID: 1002, Name: Ada, Email: ada@example.com, Phone: 0123456789"
        );
    }
}
