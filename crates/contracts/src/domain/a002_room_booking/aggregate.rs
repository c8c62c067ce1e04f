use crate::domain::common::ResourceItem;
use crate::shared::validation::{self, Violations};
use serde::{Deserialize, Serialize};

/// Room categories offered at the front desk.
pub const ROOM_TYPES: [&str; 3] = ["S1", "S4", "S5"];

/// Reception booking form. The server answers with a bare HTTP status, so
/// the locally entered booking is what ends up in the session list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomBooking {
    pub customer_name: String,
    pub phone_no: String,
    pub id_type: String,
    pub id_number: String,
    pub room_id: String,
    pub room_type: String,
    pub checkin: String,
    pub checkout: String,
    pub price_total: String,
    pub discount_applied: bool,
    pub coupon_id: String,
    pub gmail_id: String,
}

impl RoomBooking {
    /// Required fields first, then date order, phone and email shape.
    pub fn validate(&self) -> Violations {
        let mut v = Violations::new();
        let required = [
            &self.customer_name,
            &self.phone_no,
            &self.id_type,
            &self.id_number,
            &self.room_type,
            &self.checkin,
            &self.checkout,
            &self.price_total,
            &self.gmail_id,
        ];
        if required.iter().any(|value| validation::is_blank(value)) {
            v.push("Please fill in all required fields");
        }
        if !self.room_type.is_empty() && !self.is_known_room_type() {
            v.push("Please select a valid room type");
        }
        if validation::is_after(&self.checkout, &self.checkin) == Some(false) {
            v.push("Check-out date must be after check-in date");
        }
        if !self.phone_no.is_empty() {
            v.check(
                validation::is_ten_digit_phone(&self.phone_no),
                "Phone number must be 10 digits",
            );
        }
        if !self.gmail_id.is_empty() {
            v.check(
                validation::is_email(&self.gmail_id),
                "Please enter a valid email address",
            );
        }
        v
    }

    pub fn is_known_room_type(&self) -> bool {
        ROOM_TYPES.contains(&self.room_type.as_str())
    }
}

impl ResourceItem for RoomBooking {
    /// A room can only be booked once per check-in date.
    type Id = (String, String);

    fn id(&self) -> Self::Id {
        (self.room_id.clone(), self.checkin.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> RoomBooking {
        RoomBooking {
            customer_name: "Meera".into(),
            phone_no: "9876543210".into(),
            id_type: "Passport".into(),
            id_number: "P123".into(),
            room_id: "101".into(),
            room_type: "S1".into(),
            checkin: "2024-03-10".into(),
            checkout: "2024-03-12".into(),
            price_total: "4500".into(),
            gmail_id: "meera@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_booking_passes() {
        assert!(booking().validate().is_empty());
    }

    #[test]
    fn same_day_checkout_is_rejected() {
        let b = RoomBooking {
            checkout: "2024-03-10".into(),
            ..booking()
        };
        assert_eq!(
            b.validate().messages(),
            ["Check-out date must be after check-in date".to_string()]
        );
    }

    #[test]
    fn missing_fields_are_reported_once() {
        let b = RoomBooking {
            customer_name: String::new(),
            id_number: " ".into(),
            ..booking()
        };
        assert_eq!(b.validate().joined(), "Please fill in all required fields");
    }

    #[test]
    fn bad_email_and_phone() {
        let b = RoomBooking {
            phone_no: "12345".into(),
            gmail_id: "meera@example".into(),
            ..booking()
        };
        assert_eq!(
            b.validate().joined(),
            "Phone number must be 10 digits, Please enter a valid email address"
        );
    }

    #[test]
    fn room_id_is_optional() {
        let b = RoomBooking {
            room_id: String::new(),
            ..booking()
        };
        assert!(b.validate().is_empty());
        assert!(b.is_known_room_type());
    }

    #[test]
    fn unknown_room_type_is_rejected() {
        let b = RoomBooking {
            room_type: "S9".into(),
            ..booking()
        };
        assert!(!b.is_known_room_type());
        assert_eq!(b.validate().joined(), "Please select a valid room type");
    }
}
