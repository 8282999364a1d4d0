//! Blocking yes/no modal. The asking task awaits the user's answer.

use dioxus::prelude::*;
use futures::channel::oneshot;

use vitrine_client::editor::Confirm;

/// A question waiting for the user.
pub struct PendingConfirm {
    pub prompt: String,
    reply: oneshot::Sender<bool>,
}

pub fn use_confirm() -> Signal<Option<PendingConfirm>> {
    use_context::<Signal<Option<PendingConfirm>>>()
}

/// [`Confirm`] backed by the app-wide modal.
#[derive(Clone, Copy)]
pub struct ModalConfirm(pub Signal<Option<PendingConfirm>>);

impl Confirm for ModalConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let mut pending = self.0;
        // A newer question replaces an unanswered one; the old asker sees "no".
        pending.set(Some(PendingConfirm {
            prompt: prompt.to_string(),
            reply,
        }));
        answer.await.unwrap_or(false)
    }
}

fn answer(mut pending: Signal<Option<PendingConfirm>>, yes: bool) {
    if let Some(question) = pending.write().take() {
        let _ = question.reply.send(yes);
    }
}

#[component]
pub fn ConfirmDialog() -> Element {
    let pending = use_confirm();
    let prompt = pending.read().as_ref().map(|q| q.prompt.clone());

    let Some(prompt) = prompt else {
        return rsx! {};
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                p { "{prompt}" }
                div { class: "modal-actions",
                    button { class: "cancel", onclick: move |_| answer(pending, false), "Cancel" }
                    button { class: "confirm", onclick: move |_| answer(pending, true), "OK" }
                }
            }
        }
    }
}
