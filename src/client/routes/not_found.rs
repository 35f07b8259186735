use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Page {
            h2 { "Page not found" }
            Link { to: Route::Home {}, "Back to the temples" }
        }
    )
}
