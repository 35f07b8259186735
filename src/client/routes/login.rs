use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{router::Route, components::Page, store::user::{LanguageState, UserState}, util::api};
use crate::model::user::RegisterUserDto;

#[derive(Clone, Copy, PartialEq)]
enum Step {
    Phone,
    Otp,
    Register,
}

#[component]
pub fn Login() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let language = use_context::<Signal<LanguageState>>();
    let navigator = use_navigator();

    let mut step = use_signal(|| Step::Phone);
    let mut phone = use_signal(String::new);
    let mut otp = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let request_otp = move |_| async move {
        error.set(None);
        match api::send_otp(&phone()).await {
            Ok(()) => step.set(Step::Otp),
            Err(e) => error.set(Some(e)),
        }
    };

    let submit_otp = move |_| async move {
        error.set(None);
        match api::verify_otp(&phone(), &otp()).await {
            Ok(verification) if verification.is_new_user => step.set(Step::Register),
            Ok(verification) => {
                user_state.set(UserState {
                    user: verification.user,
                    fetched: true,
                });
                navigator.push(Route::Bookings {});
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let submit_registration = move |_| async move {
        error.set(None);
        let email = email();
        let request = RegisterUserDto {
            name: name(),
            email: if email.trim().is_empty() { None } else { Some(email) },
            preferred_language: language().0,
        };

        match api::register(&request).await {
            Ok(auth) => {
                user_state.set(UserState {
                    user: Some(auth.user),
                    fetched: true,
                });
                navigator.push(Route::Home {});
            }
            Err(e) => error.set(Some(e)),
        }
    };

    rsx! {
        Title { "Login | Kashi Darshan" }
        Page {
            div { class: "card",
                match step() {
                    Step::Phone => rsx! {
                        h2 { "Login with your mobile number" }
                        label { "Mobile number "
                            input {
                                r#type: "tel",
                                value: "{phone}",
                                oninput: move |e| phone.set(e.value()),
                            }
                        }
                        button { class: "btn", onclick: request_otp, "Send OTP" }
                    },
                    Step::Otp => rsx! {
                        h2 { "Enter the OTP sent to {phone}" }
                        input {
                            inputmode: "numeric",
                            maxlength: 6,
                            value: "{otp}",
                            oninput: move |e| otp.set(e.value()),
                        }
                        button { class: "btn", onclick: submit_otp, "Verify" }
                        button {
                            onclick: move |_| {
                                otp.set(String::new());
                                step.set(Step::Phone);
                            },
                            "Change number"
                        }
                    },
                    Step::Register => rsx! {
                        h2 { "Complete your registration" }
                        label { "Name "
                            input {
                                value: "{name}",
                                oninput: move |e| name.set(e.value()),
                            }
                        }
                        label { "Email (optional) "
                            input {
                                r#type: "email",
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        button { class: "btn", onclick: submit_registration, "Register" }
                    },
                }

                if let Some(e) = error() {
                    p { class: "error", "{e}" }
                }
            }
        }
    }
}
