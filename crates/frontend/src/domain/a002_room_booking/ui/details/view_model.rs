use super::model;
use crate::shared::fetcher::Fetcher;
use crate::shared::resource::ResourceStore;
use contracts::domain::a002_room_booking::aggregate::RoomBooking;
use leptos::prelude::*;

/// Booking form plus the bookings made from this page.
#[derive(Clone, Copy)]
pub struct RoomBookingViewModel {
    pub form: RwSignal<RoomBooking>,
    pub bookings: ResourceStore<RoomBooking>,
    fetcher: StoredValue<Fetcher>,
}

impl RoomBookingViewModel {
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            form: RwSignal::new(RoomBooking::default()),
            bookings: ResourceStore::new(),
            fetcher: StoredValue::new(fetcher),
        }
    }

    pub fn update(&self, apply: impl FnOnce(&mut RoomBooking)) {
        self.form.update(apply);
    }

    /// Validates and submits; the form is cleared once the server accepts.
    pub fn save_command(&self) {
        let booking = self.form.get_untracked();
        let fetcher = self.fetcher.get_value();
        let form = self.form;
        self.bookings.mutate_then(
            async move { model::book_room(&fetcher, booking).await },
            model::book_messages(),
            move |ok| {
                if ok {
                    form.set(RoomBooking::default());
                }
            },
        );
    }
}
