//! Transient notification surface.
//!
//! Anything holding a [`ToastNotifier`] can push a message; each toast
//! removes itself once its auto-close time has passed.

use dioxus::prelude::*;

use vitrine_client::notify::{Notification, NotificationKind, Notifier, Position};

use super::timer::sleep;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts in display order, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

/// Routes workflow notifications into the toast queue.
#[derive(Clone, Copy)]
pub struct ToastNotifier(pub Signal<ToastQueue>);

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::debug!("toast: {}", notification.text),
            NotificationKind::Error => tracing::debug!("error toast: {}", notification.text),
        }
        let mut queue = self.0;
        queue.write().push(notification);
    }
}

const POSITIONS: [Position; 6] = [
    Position::TopLeft,
    Position::TopCenter,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomCenter,
    Position::BottomRight,
];

#[component]
pub fn ToastContainer() -> Element {
    let queue = use_toasts();
    let toasts = queue.read().toasts.clone();

    rsx! {
        for position in POSITIONS {
            if toasts.iter().any(|t| t.notification.position == position) {
                div { class: "toast-container {position.css_class()}",
                    for toast in toasts.iter().filter(|t| t.notification.position == position).cloned() {
                        ToastItem { key: "{toast.id}", toast: toast.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut queue = use_toasts();
    let id = toast.id;
    let auto_close = toast.notification.auto_close;

    use_future(move || async move {
        sleep(auto_close).await;
        queue.write().dismiss(id);
    });

    let class = match toast.notification.kind {
        NotificationKind::Success => "toast toast-success",
        NotificationKind::Error => "toast toast-error",
    };

    rsx! {
        div { class: "{class}",
            onclick: move |_| queue.write().dismiss(id),
            "{toast.notification.text}"
        }
    }
}
