//! Load, update and delete workflow behind the product edit page.
//!
//! The editor owns no draft: the page keeps the draft in its own state and
//! hands a snapshot in on submit, so nothing here is borrowed across a
//! request.

use std::time::Duration;

use vitrine_common::nav;
use vitrine_common::product::{ProductDraft, ProductId};
use vitrine_common::validation::{self, ValidationError};

use crate::error::ClientError;
use crate::notify::{Notification, Notifier, Position};
use crate::service::ProductService;

pub const DELETE_REDIRECT_DELAY: Duration = Duration::from_millis(2000);
pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

pub const LOAD_FAILED_MESSAGE: &str = "Could not load the product.";
pub const UPDATE_FAILED_MESSAGE: &str = "Error while updating the product.";
pub const DELETE_FAILED_MESSAGE: &str = "Error while deleting the product.";
pub const DELETED_MESSAGE: &str = "Product deleted successfully!";

/// Asks the user a yes/no question and waits for the answer.
#[allow(async_fn_in_trait)]
pub trait Confirm {
    async fn confirm(&self, prompt: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("unexpected status {0}")]
    Status(u16),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The draft broke a rule; nothing was sent.
    Invalid(ValidationError),
    /// Server accepted the update, with its message.
    Saved(String),
    Failed,
}

/// Navigate to `path` once `after` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub after: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted(Redirect),
    Failed,
}

#[derive(Debug, Clone)]
pub struct ProductEditor<S, N> {
    service: S,
    notifier: N,
    id: ProductId,
}

impl<S: ProductService, N: Notifier> ProductEditor<S, N> {
    pub fn new(service: S, notifier: N, id: ProductId) -> Self {
        Self {
            service,
            notifier,
            id,
        }
    }

    /// Fetch the product and turn it into a draft.
    ///
    /// Failures are logged and reported with a generic notification; the
    /// caller keeps whatever draft it already had.
    pub async fn load(&self) -> Result<ProductDraft, LoadError> {
        let result = match self.service.get(&self.id).await {
            Ok(resp) if resp.is_ok() => Ok(ProductDraft::from(&resp.data)),
            Ok(resp) => Err(LoadError::Status(resp.status)),
            Err(e) => Err(e.into()),
        };
        if let Err(e) = &result {
            tracing::error!("Failed to load product {}: {e}", self.id);
            self.notifier.notify(Notification::error(LOAD_FAILED_MESSAGE));
        }
        result
    }

    /// Validate the draft and, if it passes, send it as an update.
    pub async fn submit(&self, draft: &ProductDraft) -> SubmitOutcome {
        let product = match validation::validate(draft) {
            Ok(product) => product,
            Err(rule) => {
                tracing::debug!("Draft for product {} rejected: {rule:?}", self.id);
                self.notifier.notify(Notification::error(rule.to_string()));
                return SubmitOutcome::Invalid(rule);
            }
        };

        match self.service.update(&self.id, &product).await {
            Ok(resp) if resp.is_ok() => {
                tracing::info!("Product {} updated", self.id);
                self.notifier
                    .notify(Notification::success(resp.data.message.clone()));
                SubmitOutcome::Saved(resp.data.message)
            }
            Ok(resp) => {
                tracing::error!("Update of product {} returned {}", self.id, resp.status);
                self.notifier.notify(Notification::error(UPDATE_FAILED_MESSAGE));
                SubmitOutcome::Failed
            }
            Err(e) => {
                tracing::error!("Update of product {} failed: {e}", self.id);
                self.notifier.notify(Notification::error(UPDATE_FAILED_MESSAGE));
                SubmitOutcome::Failed
            }
        }
    }

    /// Ask for confirmation, then delete. On success the caller should follow
    /// the returned redirect once the notification has had time to show.
    pub async fn delete<C: Confirm>(&self, confirm: &C) -> DeleteOutcome {
        if !confirm.confirm(CONFIRM_DELETE_PROMPT).await {
            tracing::debug!("Delete of product {} declined", self.id);
            return DeleteOutcome::Declined;
        }

        match self.service.delete(&self.id).await {
            Ok(resp) if resp.is_ok() => {
                tracing::info!("Product {} deleted", self.id);
                self.notifier.notify(
                    Notification::success(DELETED_MESSAGE)
                        .at(Position::TopCenter)
                        .auto_close(DELETE_REDIRECT_DELAY),
                );
                DeleteOutcome::Deleted(Redirect {
                    path: nav::CATALOG.to_string(),
                    after: DELETE_REDIRECT_DELAY,
                })
            }
            Ok(resp) => {
                tracing::error!("Delete of product {} returned {}", self.id, resp.status);
                self.notifier.notify(Notification::error(DELETE_FAILED_MESSAGE));
                DeleteOutcome::Failed
            }
            Err(e) => {
                tracing::error!("Delete of product {} failed: {e}", self.id);
                self.notifier.notify(Notification::error(DELETE_FAILED_MESSAGE));
                DeleteOutcome::Failed
            }
        }
    }
}
