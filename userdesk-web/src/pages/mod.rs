mod error;
mod guest;
mod user_form;
mod users;

pub use error::ErrorPage;
pub use guest::{GuestPage, GuestPageKind};
pub use user_form::UserFormPage;
pub use users::UsersPage;
