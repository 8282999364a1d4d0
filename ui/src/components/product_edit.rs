use dioxus::prelude::*;

use vitrine_client::editor::LoadState;
use vitrine_client::{DeleteOutcome, HttpProductService, Notification, Notifier, ProductEditor};
use vitrine_common::image::encode_image;
use vitrine_common::product::{Category, ProductDraft, ProductId};

use super::app::go;
use super::confirm_dialog::{use_confirm, ModalConfirm};
use super::timer::sleep;
use super::toast::{use_toasts, ToastNotifier};

type Editor = ProductEditor<HttpProductService, ToastNotifier>;

#[component]
pub fn ProductEdit(id: String) -> Element {
    let toasts = use_toasts();
    let confirm = use_confirm();
    let nav = use_navigator();
    let mut draft = use_signal(ProductDraft::default);
    let mut preview = use_signal(|| None::<String>);
    let mut load_state = use_signal(|| LoadState::Loading);

    let editor: Option<Editor> = use_hook(|| match HttpProductService::from_env() {
        Ok(service) => Some(ProductEditor::new(
            service,
            ToastNotifier(toasts),
            ProductId(id.clone()),
        )),
        Err(e) => {
            tracing::error!("Product API is not configured: {e}");
            None
        }
    });

    // Initial fetch
    use_effect({
        let editor = editor.clone();
        move || {
            let editor = editor.clone();
            spawn(async move {
                let Some(editor) = editor else {
                    load_state.set(LoadState::Failed);
                    return;
                };
                match editor.load().await {
                    Ok(loaded) => {
                        preview.set(Some(loaded.image.clone()).filter(|i| !i.is_empty()));
                        draft.set(loaded);
                        load_state.set(LoadState::Loaded);
                    }
                    Err(_) => load_state.set(LoadState::Failed),
                }
            });
        }
    });

    let on_image = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Failed to read {name}: {e}");
                return;
            }
        };
        match encode_image(&name, file.content_type().as_deref(), &bytes) {
            Ok(data_url) => {
                preview.set(Some(data_url.clone()));
                draft.write().image = data_url;
            }
            Err(e) => ToastNotifier(toasts).notify(Notification::error(format!("{name}: {e}"))),
        }
    };

    let on_save = {
        let editor = editor.clone();
        move |_| {
            let editor = editor.clone();
            async move {
                let Some(editor) = editor else { return };
                let snapshot = draft.read().clone();
                editor.submit(&snapshot).await;
            }
        }
    };

    let on_delete = {
        let editor = editor.clone();
        move |_| {
            let editor = editor.clone();
            async move {
                let Some(editor) = editor else { return };
                if let DeleteOutcome::Deleted(redirect) = editor.delete(&ModalConfirm(confirm)).await {
                    sleep(redirect.after).await;
                    go(nav, &redirect.path);
                }
            }
        }
    };

    let current = draft.read().clone();

    rsx! {
        div { class: "edit-product-body",
            if *load_state.read() == LoadState::Loading {
                p { class: "loading", "Loading product..." }
            }
            if *load_state.read() == LoadState::Failed {
                p { class: "load-failed", "This product could not be loaded." }
            }
            div { class: "edit-product-form",
                label { class: "edit-product-image",
                    if let Some(src) = preview.read().as_ref() {
                        img { src: "{src}", alt: "Preview" }
                    } else {
                        span { class: "edit-product-import-icon", "Choose an image" }
                    }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        style: "display: none",
                        onchange: on_image,
                    }
                }
                div { class: "edit-product-inputs",
                    h2 { "Edit product" }
                    label { r#for: "name", "Name:" }
                    input {
                        r#type: "text",
                        id: "name",
                        value: "{current.name}",
                        oninput: move |evt| draft.write().name = evt.value(),
                    }
                    label { r#for: "price", "Price:" }
                    input {
                        r#type: "number",
                        id: "price",
                        step: "0.01",
                        value: "{current.price}",
                        oninput: move |evt| draft.write().price = evt.value(),
                    }
                    label { r#for: "description", "Description:" }
                    textarea {
                        id: "description",
                        value: "{current.description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                    label { r#for: "category", "Category:" }
                    select {
                        id: "category",
                        value: "{current.category}",
                        onchange: move |evt| draft.write().category = evt.value(),
                        for category in Category::all().iter().copied() {
                            option { value: "{category.id()}", "{category.label()}" }
                        }
                    }
                    div { class: "edit-product-buttons",
                        button { class: "save", onclick: on_save, "Save" }
                        button { class: "delete", onclick: on_delete, "Delete" }
                    }
                }
            }
        }
    }
}
