use axum::http::StatusCode;

use vitrine_api_integration::{
    init_tracing, sample_product, AutoConfirm, MockBackend, Recorded, RecordingNotifier,
    UPDATED_MESSAGE,
};
use vitrine_client::editor::{DELETE_FAILED_MESSAGE, LOAD_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE};
use vitrine_client::{
    DeleteOutcome, HttpProductService, Notification, NotificationKind, ProductEditor,
    SubmitOutcome,
};
use vitrine_common::product::ProductId;
use vitrine_common::validation::ValidationError;

async fn setup() -> (MockBackend, ProductEditor<HttpProductService, RecordingNotifier>, RecordingNotifier) {
    init_tracing();
    let backend = MockBackend::start().await.unwrap();
    backend.insert("7", sample_product()).await;
    let notifier = RecordingNotifier::default();
    let editor = ProductEditor::new(
        backend.service().unwrap(),
        notifier.clone(),
        ProductId::from("7"),
    );
    (backend, editor, notifier)
}

/// Load, edit, submit: the backend stores exactly the edited values.
#[tokio::test]
async fn edit_and_save() {
    let (backend, editor, notifier) = setup().await;

    let mut draft = editor.load().await.unwrap();
    assert_eq!(draft.name, "Café torrado");
    assert_eq!(draft.price, "24.5");

    draft.name = "Café moído".into();
    draft.price = "0.01".into();
    draft.category = "2".into();
    let outcome = editor.submit(&draft).await;

    assert_eq!(outcome, SubmitOutcome::Saved(UPDATED_MESSAGE.into()));
    let stored = backend.product("7").await.unwrap();
    assert_eq!(stored.name, "Café moído");
    assert_eq!(stored.price, 0.01);
    assert_eq!(stored.category_id, 2);

    let puts = backend
        .requests()
        .await
        .into_iter()
        .filter(|r| matches!(r, Recorded::Put(..)))
        .count();
    assert_eq!(puts, 1);
    assert_eq!(notifier.all(), vec![Notification::success(UPDATED_MESSAGE)]);
}

/// A draft that fails validation never reaches the network.
#[tokio::test]
async fn invalid_draft_stays_local() {
    let (backend, editor, notifier) = setup().await;
    let mut draft = editor.load().await.unwrap();
    draft.price = "1000000.01".into();

    let outcome = editor.submit(&draft).await;

    assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::PriceOutOfRange));
    assert_eq!(backend.requests().await, vec![Recorded::Get("7".into())]);
    assert_eq!(backend.product("7").await, Some(sample_product()));
    assert_eq!(
        notifier.all(),
        vec![Notification::error(ValidationError::PriceOutOfRange.to_string())]
    );
}

#[tokio::test]
async fn server_rejection_shows_generic_error() {
    let (backend, editor, notifier) = setup().await;
    let draft = editor.load().await.unwrap();
    backend.fail_with(StatusCode::BAD_GATEWAY).await;

    let outcome = editor.submit(&draft).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    let shown = notifier.all();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, NotificationKind::Error);
    assert_eq!(shown[0].text, UPDATE_FAILED_MESSAGE);
}

#[tokio::test]
async fn load_of_missing_product_notifies() {
    init_tracing();
    let backend = MockBackend::start().await.unwrap();
    let notifier = RecordingNotifier::default();
    let editor = ProductEditor::new(
        backend.service().unwrap(),
        notifier.clone(),
        ProductId::from("999"),
    );

    assert!(editor.load().await.is_err());
    assert_eq!(notifier.all(), vec![Notification::error(LOAD_FAILED_MESSAGE)]);
}

#[tokio::test]
async fn confirmed_delete_removes_and_redirects() {
    let (backend, editor, _notifier) = setup().await;

    let outcome = editor.delete(&AutoConfirm(true)).await;

    match outcome {
        DeleteOutcome::Deleted(redirect) => {
            assert_eq!(redirect.path, "/catalogo");
            assert_eq!(redirect.after.as_millis(), 2000);
        }
        other => panic!("expected deletion, got {other:?}"),
    }
    assert_eq!(backend.product("7").await, None);
    assert_eq!(backend.requests().await, vec![Recorded::Delete("7".into())]);
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let (backend, editor, notifier) = setup().await;

    let outcome = editor.delete(&AutoConfirm(false)).await;

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert!(backend.requests().await.is_empty());
    assert!(notifier.all().is_empty());
    assert_eq!(backend.product("7").await, Some(sample_product()));
}

#[tokio::test]
async fn delete_of_missing_product_fails() {
    let (backend, _editor, notifier) = setup().await;
    let editor = ProductEditor::new(
        backend.service().unwrap(),
        notifier.clone(),
        ProductId::from("8"),
    );

    assert_eq!(editor.delete(&AutoConfirm(true)).await, DeleteOutcome::Failed);
    assert_eq!(notifier.all(), vec![Notification::error(DELETE_FAILED_MESSAGE)]);
    assert_eq!(backend.product("7").await, Some(sample_product()));
}
