use dioxus::prelude::*;

use vitrine_common::session::Session;

use super::confirm_dialog::{ConfirmDialog, PendingConfirm};
use super::header::Header;
use super::product_edit::ProductEdit;
use super::session_state::{sign_out, use_session};
use super::toast::{ToastContainer, ToastQueue};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/catalogo?:pesquisa")]
    Catalog { pesquisa: String },
    #[route("/cadastro-cliente")]
    Register {},
    #[route("/login-cliente")]
    Login {},
    #[route("/pedidos")]
    Orders {},
    #[route("/carrinho")]
    Cart {},
    #[route("/produtos/:id/editar")]
    EditProduct { id: String },
}

/// Navigate to a path produced by `vitrine_common::nav`.
pub fn go(nav: Navigator, path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => tracing::warn!("No route for {path}: {e}"),
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Session::anonymous()));
    use_context_provider(|| Signal::new(ToastQueue::default()));
    use_context_provider(|| Signal::new(None::<PendingConfirm>));

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let session = use_session();
    let current = session.read().clone();

    rsx! {
        div { class: "vitrine-app",
            Header {
                session: current,
                on_sign_out: move |_| sign_out(session),
            }
            main {
                Outlet::<Route> {}
            }
            ConfirmDialog {}
            ToastContainer {}
        }
    }
}

/// Route component: storefront landing page.
#[component]
fn Home() -> Element {
    rsx! {
        div { class: "home",
            h2 { "Welcome" }
        }
    }
}

/// Route component: product catalog, optionally filtered by the header search.
#[component]
fn Catalog(pesquisa: String) -> Element {
    rsx! {
        div { class: "catalog",
            h2 { "Products" }
            if !pesquisa.is_empty() {
                p { class: "search-term", "Results for \"{pesquisa}\"" }
            }
        }
    }
}

#[component]
fn Register() -> Element {
    rsx! { h2 { "Create your account" } }
}

#[component]
fn Login() -> Element {
    rsx! { h2 { "Sign in" } }
}

#[component]
fn Orders() -> Element {
    rsx! { h2 { "My orders" } }
}

#[component]
fn Cart() -> Element {
    rsx! { h2 { "Cart" } }
}

/// Route component: keyed on the id so a different product remounts the page.
#[component]
fn EditProduct(id: String) -> Element {
    rsx! { ProductEdit { key: "{id}", id: id.clone() } }
}
