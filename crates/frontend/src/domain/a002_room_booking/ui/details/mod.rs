pub mod model;
pub mod view_model;

use self::view_model::RoomBookingViewModel;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::components::{MessageBanner, PageHeader};
use crate::shared::date_utils::display_date;
use crate::shared::fetcher::use_fetcher;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use contracts::domain::a002_room_booking::aggregate::{RoomBooking, ROOM_TYPES};
use leptos::prelude::*;

type Getter = fn(&RoomBooking) -> String;
type Setter = fn(&mut RoomBooking, String);

fn field(
    vm: RoomBookingViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <Input
            id=id
            label=label
            input_type=input_type
            placeholder=format!("Enter {}", label.to_lowercase())
            required=true
            value=Signal::derive(move || vm.form.with(get))
            on_input=Callback::new(move |v: String| vm.update(|b| set(b, v)))
        />
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RoomBookingPage() -> impl IntoView {
    let vm = RoomBookingViewModel::new(use_fetcher());
    let busy = move || vm.bookings.is_loading();
    let room_types = Signal::derive(|| {
        ROOM_TYPES
            .iter()
            .map(|t| (t.to_string(), t.to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <PageFrame page_id="a002_room_booking--form" category=PAGE_CAT_FORM>
            <PageHeader title="Room Booking" busy=Signal::derive(busy) />

            <MessageBanner
                banner=Signal::derive(move || vm.bookings.banner())
                on_dismiss=Callback::new(move |_| vm.bookings.dismiss_banner())
            />

            <form class="form-card" on:submit=move |ev| {
                ev.prevent_default();
                vm.save_command();
            }>
                <div class="form__grid">
                    {field(vm, "customer_name", "Customer Name", "text",
                        |b| b.customer_name.clone(), |b, v| b.customer_name = v)}
                    {field(vm, "phone_no", "Phone Number", "tel",
                        |b| b.phone_no.clone(), |b, v| b.phone_no = v)}
                    {field(vm, "gmail_id", "Email ID", "email",
                        |b| b.gmail_id.clone(), |b, v| b.gmail_id = v)}
                    {field(vm, "id_type", "ID Type", "text",
                        |b| b.id_type.clone(), |b, v| b.id_type = v)}
                    {field(vm, "id_number", "ID Number", "text",
                        |b| b.id_number.clone(), |b, v| b.id_number = v)}
                    <Select
                        id="room_type"
                        label="Room Type"
                        placeholder="Select room type"
                        required=true
                        options=room_types
                        value=Signal::derive(move || vm.form.with(|b| b.room_type.clone()))
                        on_change=Callback::new(move |v: String| vm.update(|b| b.room_type = v))
                    />
                    <Input
                        id="room_id"
                        label="Room ID"
                        placeholder="Enter room id"
                        value=Signal::derive(move || vm.form.with(|b| b.room_id.clone()))
                        on_input=Callback::new(move |v: String| vm.update(|b| b.room_id = v))
                    />
                    {field(vm, "checkin", "Check-In Date", "date",
                        |b| b.checkin.clone(), |b, v| b.checkin = v)}
                    {field(vm, "checkout", "Check-Out Date", "date",
                        |b| b.checkout.clone(), |b, v| b.checkout = v)}
                    {field(vm, "price_total", "Price Total", "number",
                        |b| b.price_total.clone(), |b, v| b.price_total = v)}
                </div>

                <Checkbox
                    id="discount_applied"
                    label="Discount Applied"
                    checked=Signal::derive(move || vm.form.with(|b| b.discount_applied))
                    on_change=Callback::new(move |on: bool| vm.update(|b| b.discount_applied = on))
                />
                <Show when=move || vm.form.with(|b| b.discount_applied)>
                    <Input
                        id="coupon_id"
                        label="Coupon ID"
                        placeholder="Enter coupon id"
                        value=Signal::derive(move || vm.form.with(|b| b.coupon_id.clone()))
                        on_input=Callback::new(move |v: String| vm.update(|b| b.coupon_id = v))
                    />
                </Show>

                <div class="form__actions">
                    <Button button_type="submit" disabled=Signal::derive(busy)>
                        {move || if busy() { "Booking..." } else { "Book Room" }}
                    </Button>
                </div>
            </form>

            <Show when=move || vm.bookings.state().with(|s| !s.items.is_empty())>
                <h3 class="section-title">"Booked this session"</h3>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Room Type"</th>
                            <th class="table__header-cell">"Room ID"</th>
                            <th class="table__header-cell">"Check-In"</th>
                            <th class="table__header-cell">"Check-Out"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            vm.bookings
                                .items()
                                .into_iter()
                                .map(|b| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{b.customer_name}</td>
                                            <td class="table__cell">{b.room_type}</td>
                                            <td class="table__cell">{if b.room_id.is_empty() { "N/A".to_string() } else { b.room_id }}</td>
                                            <td class="table__cell">{display_date(Some(&b.checkin))}</td>
                                            <td class="table__cell">{display_date(Some(&b.checkout))}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </PageFrame>
    }
}
