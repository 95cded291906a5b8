pub mod envelope;
pub mod errors;
pub mod user;

pub use envelope::DataEnvelope;
pub use errors::{ValidationErrorResponse, ValidationErrors};
pub use user::{UserField, UserId, UserRecord};
