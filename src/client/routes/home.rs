use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::user::LanguageState, util::api};

#[component]
pub fn Home() -> Element {
    let language = use_context::<Signal<LanguageState>>();

    let temples = use_resource(api::get_jyotirlingas);
    let quote = use_resource(api::get_random_quote);

    let quote = match &*quote.read() {
        Some(Ok(Some(quote))) => Some((
            quote.text.get(language().0).to_string(),
            quote.author.get(language().0).to_string(),
        )),
        _ => None,
    };

    rsx!(
        Title { "Kashi Darshan" }
        Meta {
            name: "description",
            content: "Book darshan at the Jyotirlingas of Varanasi."
        }
        Page {
            if let Some((text, author)) = quote {
                blockquote { class: "quote",
                    p { "{text}" }
                    footer { "{author}" }
                }
            }

            h2 { "Jyotirlingas" }
            match &*temples.read() {
                Some(Ok(temples)) => {
                    let cards: Vec<(i32, String, String, String, Option<String>)> = temples
                        .iter()
                        .map(|temple| {
                            (
                                temple.id,
                                temple.slug.clone(),
                                temple.name.get(language().0).to_string(),
                                temple.address.clone(),
                                temple.image_url.clone(),
                            )
                        })
                        .collect();

                    rsx! {
                        div { class: "grid",
                            for (id, slug, name, address, image_url) in cards {
                                div { class: "card", key: "{id}",
                                    if let Some(image_url) = image_url {
                                        img { src: "{image_url}", width: "100%" }
                                    }
                                    h3 { "{name}" }
                                    p { "{address}" }
                                    Link {
                                        to: Route::Temple { slug },
                                        class: "btn",
                                        "Book darshan"
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! { p { class: "error", "{e}" } },
                None => rsx! { p { "Loading temples..." } },
            }
        }
    )
}
