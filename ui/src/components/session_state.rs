use dioxus::prelude::*;

use vitrine_common::session::Session;

/// Current session, provided at the top of the app.
///
/// The login and registration pages own writes; everything else reads it and
/// passes it down explicitly.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Sign-out action handed to the header.
pub fn sign_out(mut session: Signal<Session>) {
    if let Some(user) = session.read().user.as_ref() {
        tracing::info!("Signing out {}", user.name);
    }
    session.set(Session::anonymous());
}
