use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaFilePdf;
use dioxus_free_icons::Icon;

use crate::client::{
    components::Page,
    router::Route,
    store::user::{LanguageState, UserState},
    util::api,
};
use crate::model::booking::{format_rupees, BookingStatusDto, PaymentStatusDto};

struct BookingRow {
    receipt_number: String,
    temple: String,
    darshan: String,
    when: String,
    persons: i32,
    amount: String,
    status: &'static str,
    payment: &'static str,
    cancellable: bool,
}

fn status_label(status: BookingStatusDto) -> &'static str {
    match status {
        BookingStatusDto::Confirmed => "Confirmed",
        BookingStatusDto::Cancelled => "Cancelled",
        BookingStatusDto::Completed => "Completed",
    }
}

fn payment_label(status: PaymentStatusDto) -> &'static str {
    match status {
        PaymentStatusDto::Pending => "Payment pending",
        PaymentStatusDto::Completed => "Paid",
        PaymentStatusDto::Failed => "Payment failed",
        PaymentStatusDto::Refunded => "Refunded",
    }
}

#[component]
pub fn Bookings() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let language = use_context::<Signal<LanguageState>>();

    let mut bookings = use_resource(api::get_bookings);
    let mut error = use_signal(|| None::<String>);

    if user_state.read().fetched && user_state.read().user.is_none() {
        return rsx! {
            Page {
                p { "Please login to see your bookings." }
                Link { to: Route::Login {}, class: "btn", "Login" }
            }
        };
    }

    let content = match &*bookings.read() {
        Some(Ok(list)) if list.is_empty() => rsx! { p { "You have no bookings yet." } },
        Some(Ok(list)) => {
            let lang = language().0;
            let rows: Vec<BookingRow> = list
                .iter()
                .map(|booking| BookingRow {
                    receipt_number: booking.receipt_number.clone(),
                    temple: booking.jyotirlinga_name.get(lang).to_string(),
                    darshan: booking.darshan_type_name.get(lang).to_string(),
                    when: format!(
                        "{} {} - {}",
                        booking.visit_date.format("%d %b %Y"),
                        booking.start_time.format("%H:%M"),
                        booking.end_time.format("%H:%M")
                    ),
                    persons: booking.number_of_persons,
                    amount: format_rupees(booking.total_amount_paise),
                    status: status_label(booking.status),
                    payment: payment_label(booking.payment_status),
                    cancellable: booking.status == BookingStatusDto::Confirmed,
                })
                .collect();

            rsx! {
                div { class: "grid",
                    for row in rows {
                        div { class: "card", key: "{row.receipt_number}",
                            h3 { "{row.temple}" }
                            p { "{row.darshan}" }
                            p { "{row.when}" }
                            p { "Persons: {row.persons}, INR {row.amount}" }
                            p { "{row.status}, {row.payment}" }
                            p { "Receipt {row.receipt_number}" }
                            a {
                                class: "btn",
                                href: api::receipt_url(&row.receipt_number),
                                download: "{row.receipt_number}.pdf",
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaFilePdf
                                }
                                " Download receipt"
                            }
                            if row.cancellable {
                                button {
                                    onclick: {
                                        let receipt_number = row.receipt_number.clone();
                                        move |_| {
                                            let receipt_number = receipt_number.clone();
                                            async move {
                                                match api::cancel_booking(&receipt_number).await {
                                                    Ok(_) => bookings.restart(),
                                                    Err(e) => error.set(Some(e)),
                                                }
                                            }
                                        }
                                    },
                                    "Cancel"
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! { p { class: "error", "{e}" } },
        None => rsx! { p { "Loading bookings..." } },
    };

    rsx! {
        Title { "My bookings | Kashi Darshan" }
        Page {
            h2 { "My bookings" }
            if let Some(e) = error() {
                p { class: "error", "{e}" }
            }
            {content}
        }
    }
}
