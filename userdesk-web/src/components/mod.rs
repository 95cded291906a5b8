pub(crate) mod guards;
pub(crate) mod loading;
pub(crate) mod notification;
pub(crate) mod validation_alert;

pub use guards::{GuestLayout, RequireAuth};
pub use loading::Loading;
pub use notification::NotificationBanner;
pub use validation_alert::ValidationAlert;
