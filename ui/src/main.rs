//! Vitrine storefront web client.
//!
//! `dioxus::launch` installs the tracing logger (browser console on web).
//! The product API location comes from `VITRINE_API_URL` at build time.

mod components;

fn main() {
    dioxus::launch(components::app::App);
}
