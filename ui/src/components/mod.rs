pub mod app;
pub mod confirm_dialog;
pub mod header;
pub mod product_edit;
pub mod session_state;
pub mod timer;
pub mod toast;
