pub mod contact;
pub mod search;

pub use contact::{Contact, ContactUpdate, is_valid_phone_number};
