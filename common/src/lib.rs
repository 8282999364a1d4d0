pub mod image;
pub mod nav;
pub mod product;
pub mod session;
pub mod validation;
