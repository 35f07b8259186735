use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{BookingForm, Page},
    store::user::LanguageState,
    util::api,
};

#[component]
pub fn Temple(slug: String) -> Element {
    let language = use_context::<Signal<LanguageState>>();

    let slug_for_fetch = slug.clone();
    let detail = use_resource(move || {
        let slug = slug_for_fetch.clone();
        async move { api::get_jyotirlinga(&slug).await }
    });

    let view = match &*detail.read() {
        Some(Ok(detail)) => {
            let lang = language().0;
            let name = detail.jyotirlinga.name.get(lang).to_string();
            let city = detail.city.name.get(lang).to_string();
            let description = detail.jyotirlinga.description.get(lang).to_string();
            let significance = detail.jyotirlinga.significance.get(lang).to_string();
            let gallery = detail.jyotirlinga.gallery.clone();
            let darshan_types = detail.darshan_types.clone();

            rsx! {
                Title { "{name} | Kashi Darshan" }
                Page {
                    h2 { "{name}" }
                    p { "{city}" }
                    p { "{description}" }
                    h3 { "Significance" }
                    p { "{significance}" }

                    if !gallery.is_empty() {
                        div { class: "grid",
                            for url in gallery {
                                img { key: "{url}", src: "{url}", width: "100%" }
                            }
                        }
                    }

                    h3 { "Darshan" }
                    if darshan_types.is_empty() {
                        p { "No darshan is open for booking at the moment." }
                    }
                    div { class: "grid",
                        for (id, darshan_type) in darshan_types.into_iter().map(|d| (d.id, d)) {
                            BookingForm {
                                key: "{id}",
                                jyotirlinga_slug: slug.clone(),
                                darshan_type,
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            Page { p { class: "error", "{e}" } }
        },
        None => rsx! {
            Page { p { "Loading..." } }
        },
    };
    view
}
