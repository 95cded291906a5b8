pub mod header;
pub mod layout;
pub mod user_drafts;
pub mod user_form_state;
pub mod user_sync;
