use crate::models::session::Notification;
use yew::{Callback, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    #[prop_or_default]
    pub notification: Option<Notification>,
    #[prop_or_default]
    pub on_dismiss: Callback<()>,
}

/// Transient message shown above the page content.
#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };
    let onclick = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class="toast toast-top toast-end z-50">
            <div class="alert alert-success shadow-lg">
                <span>{notification.message.clone()}</span>
                <button class="btn btn-ghost btn-xs" aria-label="dismiss" {onclick}>{"✕"}</button>
            </div>
        </div>
    }
}
