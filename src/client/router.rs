use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Bookings, Home, Login, NotFound, Temple},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/temples/:slug")]
    Temple { slug: String },

    #[route("/login")]
    Login {},

    #[route("/bookings")]
    Bookings {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
