use dioxus::prelude::*;

use crate::client::{
    router::Route,
    store::user::{LanguageState, UserState},
    util::api::get_me,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));
    use_context_provider(|| Signal::new(LanguageState::default()));

    use_future(move || async move {
        let user = get_me().await.ok().flatten();
        user_state.set(UserState {
            user,
            fetched: true,
        });
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
