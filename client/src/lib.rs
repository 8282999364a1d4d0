//! Service layer and edit workflow for the storefront client.

pub mod config;
pub mod editor;
pub mod error;
pub mod notify;
pub mod service;

pub use config::ClientConfig;
pub use editor::{Confirm, DeleteOutcome, ProductEditor, Redirect, SubmitOutcome};
pub use error::ClientError;
pub use notify::{Notification, NotificationKind, Notifier, Position};
pub use service::{HttpProductService, ProductService, ServiceResponse};
