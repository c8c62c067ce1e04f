use crate::shared::action_error::ActionError;
use crate::shared::fetcher::{Fetcher, SuccessMarker};
use crate::shared::resource::{ActionMessages, Reconcile};
use contracts::domain::a002_room_booking::aggregate::RoomBooking;

const ROOM_BOOKING: &str = "/reseption/room_booking";

pub fn book_messages() -> ActionMessages {
    ActionMessages::new("Room booked successfully!", "Failed to book room")
}

/// Books a room. The coupon only travels with a discounted booking.
pub async fn book_room(
    fetcher: &Fetcher,
    mut booking: RoomBooking,
) -> Result<Reconcile<RoomBooking>, ActionError> {
    ActionError::check(booking.validate())?;
    if !booking.discount_applied {
        booking.coupon_id.clear();
    }
    fetcher
        .post(ROOM_BOOKING, Some(&booking), SuccessMarker::HttpOk)
        .await?;
    log::info!("room {} booked for {}", booking.room_type, booking.customer_name);
    Ok(Reconcile::Append(booking))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::ListState;
    use crate::shared::testing::RecordingTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn booking() -> RoomBooking {
        RoomBooking {
            customer_name: "Meera".into(),
            phone_no: "9876543210".into(),
            id_type: "Passport".into(),
            id_number: "P123".into(),
            room_id: "101".into(),
            room_type: "S4".into(),
            checkin: "2024-01-10".into(),
            checkout: "2024-01-12".into(),
            price_total: "4500".into(),
            gmail_id: "meera@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn checkout_before_checkin_never_reaches_the_server() {
        let t = RecordingTransport::new();
        let b = RoomBooking {
            checkout: "2024-01-05".into(),
            ..booking()
        };
        let mut state = ListState::new();
        state.begin_mutation();
        let result = block_on(book_room(&t.fetcher(), b));
        assert!(matches!(&result, Err(ActionError::Validation(msgs))
            if msgs.contains(&"Check-out date must be after check-in date".to_string())));
        state.finish_mutation(result, &book_messages());
        assert_eq!(t.call_count(), 0);
        assert!(state.items.is_empty());
        assert_eq!(
            state.banner.map(|b| b.text),
            Some("Check-out date must be after check-in date".to_string())
        );
    }

    #[test]
    fn accepted_booking_is_appended() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "ok": true }));
        let mut state = ListState::new();
        state.begin_mutation();
        let result = block_on(book_room(&t.fetcher(), booking()));
        let outcome = state.finish_mutation(result, &book_messages());
        assert!(outcome.succeeded);
        assert_eq!(state.items, vec![booking()]);
        assert_eq!(t.calls()[0].url, "http://hotel.test/reseption/room_booking");
        assert_eq!(
            state.banner.map(|b| b.text),
            Some("Room booked successfully!".to_string())
        );
    }

    #[test]
    fn coupon_dropped_without_discount() {
        let t = RecordingTransport::new();
        t.reply(200, json!({}));
        let b = RoomBooking {
            coupon_id: "SPRING".into(),
            ..booking()
        };
        block_on(book_room(&t.fetcher(), b)).unwrap();
        let sent = t.calls()[0].body.clone().unwrap();
        assert_eq!(sent["coupon_id"], json!(""));
        assert_eq!(sent["discount_applied"], json!(false));
    }

    #[test]
    fn server_error_leaves_bookings_alone() {
        let t = RecordingTransport::new();
        t.reply(500, json!({}));
        let mut state = ListState::new();
        state.begin_mutation();
        let result = block_on(book_room(&t.fetcher(), booking()));
        state.finish_mutation(result, &book_messages());
        assert!(state.items.is_empty());
        assert_eq!(state.banner.map(|b| b.text), Some("Failed to book room".to_string()));
    }
}
