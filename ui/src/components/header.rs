use dioxus::prelude::*;

use vitrine_common::nav::{resolve, HeaderAction, HeaderLinks, HeaderOutcome};
use vitrine_common::session::Session;

use super::app::go;

/// Site header. Stateless apart from the search box text; the session and the
/// sign-out action come from the caller.
#[component]
pub fn Header(session: Session, on_sign_out: EventHandler<()>) -> Element {
    let nav = use_navigator();
    let mut search = use_signal(String::new);
    let links = HeaderLinks::for_session(&session);

    let run = move |action: HeaderAction| match resolve(action, &session) {
        HeaderOutcome::Navigate(path) => go(nav, &path),
        HeaderOutcome::SignOut => on_sign_out.call(()),
    };

    rsx! {
        header { class: "header-container",
            img {
                class: "logo-header",
                src: "/logo.svg",
                alt: "Logo",
                onclick: {
                    let run = run.clone();
                    move |_| run(HeaderAction::Logo)
                },
            }
            div { class: "header-search-container",
                span { class: "header-search-icon", "🔍" }
                input {
                    class: "header-search-bar",
                    r#type: "text",
                    placeholder: "ZzZzz......",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                    onkeydown: {
                        let run = run.clone();
                        move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                run(HeaderAction::Search(search.read().clone()));
                            }
                        }
                    },
                }
            }
            nav { class: "header-buttons-container",
                if links.admin_icon {
                    span { class: "header-admin-icon", title: "Admin", "⚙" }
                }
                if links.register_and_login {
                    p { class: "header-button",
                        onclick: {
                            let run = run.clone();
                            move |_| run(HeaderAction::Register)
                        },
                        "Register"
                    }
                    p { class: "header-button",
                        onclick: {
                            let run = run.clone();
                            move |_| run(HeaderAction::Login)
                        },
                        "Login"
                    }
                }
                if links.logout {
                    p { class: "header-button",
                        onclick: {
                            let run = run.clone();
                            move |_| run(HeaderAction::Logout)
                        },
                        "Logout"
                    }
                }
                p { class: "header-button",
                    onclick: {
                        let run = run.clone();
                        move |_| run(HeaderAction::Products)
                    },
                    "Products"
                }
                p { class: "header-button",
                    onclick: {
                        let run = run.clone();
                        move |_| run(HeaderAction::Orders)
                    },
                    "Orders"
                }
                span { class: "header-button header-cart",
                    title: "Cart",
                    onclick: move |_| run(HeaderAction::Cart),
                    "🛒"
                }
            }
        }
    }
}
