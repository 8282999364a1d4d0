//! Route paths and the header's navigation decisions.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::session::Session;

pub const HOME: &str = "/";
pub const CATALOG: &str = "/catalogo";
pub const REGISTER: &str = "/cadastro-cliente";
pub const LOGIN: &str = "/login-cliente";
pub const ORDERS: &str = "/pedidos";
pub const CART: &str = "/carrinho";

pub const SEARCH_PARAM: &str = "pesquisa";

/// Characters left as-is in a URI component; everything else is
/// percent-encoded, spaces as `%20`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Catalog path filtered by a search term. The term is trimmed and encoded;
/// an empty term still navigates.
pub fn catalog_search(query: &str) -> String {
    let encoded = utf8_percent_encode(query.trim(), COMPONENT);
    format!("{CATALOG}?{SEARCH_PARAM}={encoded}")
}

/// Something the user did in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    Logo,
    /// Enter pressed in the search box, with the box's current text.
    Search(String),
    Register,
    Login,
    Logout,
    Products,
    Orders,
    Cart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderOutcome {
    Navigate(String),
    SignOut,
}

/// Decide what a header action does for the given session.
///
/// Orders and cart are gated softly: anonymous users go to registration.
pub fn resolve(action: HeaderAction, session: &Session) -> HeaderOutcome {
    let path = match action {
        HeaderAction::Logo => HOME.to_string(),
        HeaderAction::Search(query) => catalog_search(&query),
        HeaderAction::Register => REGISTER.to_string(),
        HeaderAction::Login => LOGIN.to_string(),
        HeaderAction::Logout => return HeaderOutcome::SignOut,
        HeaderAction::Products => CATALOG.to_string(),
        HeaderAction::Orders => gated(session, ORDERS),
        HeaderAction::Cart => gated(session, CART),
    };
    HeaderOutcome::Navigate(path)
}

fn gated(session: &Session, target: &str) -> String {
    if session.is_authenticated() {
        target.to_string()
    } else {
        REGISTER.to_string()
    }
}

/// Which optional header items are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLinks {
    pub admin_icon: bool,
    pub register_and_login: bool,
    pub logout: bool,
}

impl HeaderLinks {
    pub fn for_session(session: &Session) -> Self {
        let signed_in = session.is_authenticated();
        Self {
            admin_icon: session.is_admin(),
            register_and_login: !signed_in,
            logout: signed_in,
        }
    }
}
