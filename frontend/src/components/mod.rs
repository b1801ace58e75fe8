pub mod layout;
pub mod modal;
