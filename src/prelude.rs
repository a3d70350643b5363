pub use crate::cli::{command, run_app, run_menu};
pub use crate::domain::{
    contact::{self, Contact, ContactUpdate, is_valid_phone_number},
    search::matches_query,
};
pub use crate::errors::AppError;
pub use crate::store::{ContactStore, memory};
