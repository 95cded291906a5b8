use crate::config::FrontendConfig;
use crate::models::session::{self, SessionHandle, SessionState};
use crate::routes::{MainRoute, switch};
use yew::{AttrValue, Callback, Html, function_component, html};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Root component: owns the session store and injects it into the routes.
#[function_component(App)]
pub fn app() -> Html {
    let (session_state, dispatch) = use_store::<SessionState>();
    let config = FrontendConfig::new();

    let on_notify = {
        let dispatch = dispatch.clone();
        let timeout_ms = config.notification_timeout_ms;
        Callback::from(move |message: String| session::notify(&dispatch, message, timeout_ms))
    };

    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(SessionState::dismiss_notification))
    };

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            log::info!("signing out");
            session::set_token(&dispatch, None);
        })
    };

    let handle = SessionHandle {
        token: session_state
            .token()
            .map(|token| AttrValue::from(token.to_string())),
        notification: session_state.notification().cloned(),
        on_notify,
        on_dismiss,
        on_logout,
    };

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={move |route| switch(route, &handle)} />
        </BrowserRouter>
    }
}
