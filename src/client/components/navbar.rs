use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaLanguage;
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;
use crate::client::{store::user::{LanguageState, UserState}, util::api};
use crate::model::i18n::Language;

#[component]
pub fn Navbar() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();
    let mut language = use_context::<Signal<LanguageState>>();

    let toggle_label = match language().0 {
        Language::En => "हिन्दी",
        Language::Hi => "English",
    };

    rsx! {
        div {
            class: "navbar",
            div {
                Link { to: Route::Home {},
                    strong { "Kashi Darshan" }
                }
            }
            div { style: "display: flex; gap: 1rem; align-items: center;",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        let toggled = language().toggled();
                        language.set(toggled);
                    },
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaLanguage
                    }
                    " {toggle_label}"
                }
                if user_state.read().user.is_some() {
                    Link { to: Route::Bookings {}, "My bookings" }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| async move {
                            if api::logout().await.is_ok() {
                                user_state.set(UserState { user: None, fetched: true });
                                navigator.push(Route::Home {});
                            }
                        },
                        "Logout"
                    }
                } else if user_state.read().fetched {
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
