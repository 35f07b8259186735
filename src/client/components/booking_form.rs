use dioxus::prelude::*;

use crate::client::{router::Route, store::user::{LanguageState, UserState}, util::api};
use crate::model::{
    booking::{format_rupees, CreateBookingDto},
    content::DarshanTypeDto,
};

/// Date picker, slot availability and devotee details for one darshan type
#[component]
pub fn BookingForm(jyotirlinga_slug: String, darshan_type: DarshanTypeDto) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let language = use_context::<Signal<LanguageState>>();
    let navigator = use_navigator();

    let mut date = use_signal(String::new);
    let mut slot_id = use_signal(|| None::<i32>);
    let mut persons = use_signal(|| 1);
    let mut devotee_name = use_signal(String::new);
    let mut devotee_phone = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let darshan_type_id = darshan_type.id;
    let slots = use_resource(move || async move {
        let date = date();
        if date.is_empty() {
            return Ok(Vec::new());
        }
        api::get_slot_availability(darshan_type_id, &date).await
    });

    let total = format_rupees(darshan_type.price_paise * persons() as i64);
    let price = format_rupees(darshan_type.price_paise);
    let duration = darshan_type.duration_minutes;
    let max_persons = darshan_type.max_persons_per_booking;
    let name = darshan_type.name.get(language().0).to_string();
    let description = darshan_type.description.get(language().0).to_string();

    let submit = move |_| {
        let jyotirlinga_slug = jyotirlinga_slug.clone();
        async move {
            let Some(time_slot_id) = slot_id() else {
                error.set(Some("Please choose a time slot".to_string()));
                return;
            };
            let Ok(visit_date) = date().parse() else {
                error.set(Some("Please choose a visit date".to_string()));
                return;
            };

            let request = CreateBookingDto {
                jyotirlinga_slug,
                darshan_type_id,
                time_slot_id,
                visit_date,
                number_of_persons: persons(),
                devotee_name: devotee_name(),
                devotee_phone: devotee_phone(),
            };

            match api::create_booking(&request).await {
                Ok(_) => {
                    navigator.push(Route::Bookings {});
                }
                Err(e) => error.set(Some(e)),
            }
        }
    };

    rsx! {
        div { class: "card",
            h3 { "{name}" }
            p { "{description}" }
            p { "INR {price} per person, {duration} minutes" }

            if user_state.read().user.is_none() {
                Link { to: Route::Login {}, "Login to book" }
            } else {
                label { "Visit date "
                    input {
                        r#type: "date",
                        value: "{date}",
                        oninput: move |e| {
                            date.set(e.value());
                            slot_id.set(None);
                        },
                    }
                }

                match &*slots.read() {
                    Some(Ok(slots)) => {
                        let options: Vec<(i32, bool, String)> = slots
                            .iter()
                            .map(|slot| {
                                let text = format!(
                                    "{} - {} ({} of {} left)",
                                    slot.start_time.format("%H:%M"),
                                    slot.end_time.format("%H:%M"),
                                    slot.available,
                                    slot.capacity
                                );
                                (slot.time_slot_id, slot.available == 0, text)
                            })
                            .collect();

                        rsx! {
                            ul {
                                for (id, full, text) in options {
                                    li { key: "{id}",
                                        label {
                                            input {
                                                r#type: "radio",
                                                name: "slot-{darshan_type_id}",
                                                disabled: full,
                                                checked: slot_id() == Some(id),
                                                onchange: move |_| slot_id.set(Some(id)),
                                            }
                                            " {text}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    Some(Err(e)) => rsx! { p { class: "error", "{e}" } },
                    None => rsx! { p { "Loading slots..." } },
                }

                label { "Persons "
                    input {
                        r#type: "number",
                        min: 1,
                        max: max_persons,
                        value: "{persons}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i32>() {
                                persons.set(value.clamp(1, max_persons));
                            }
                        },
                    }
                }
                label { "Devotee name "
                    input {
                        value: "{devotee_name}",
                        oninput: move |e| devotee_name.set(e.value()),
                    }
                }
                label { "Devotee phone "
                    input {
                        r#type: "tel",
                        value: "{devotee_phone}",
                        oninput: move |e| devotee_phone.set(e.value()),
                    }
                }

                p { "Total: INR {total}" }

                if let Some(e) = error() {
                    p { class: "error", "{e}" }
                }

                button { class: "btn", onclick: submit, "Book darshan" }
            }
        }
    }
}
