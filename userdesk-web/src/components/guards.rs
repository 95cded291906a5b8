//! Route guards driven by the session token.
//!
//! These only steer navigation; the API remains responsible for rejecting
//! requests without a valid session.

use crate::routes::MainRoute;
use yew::{AttrValue, Children, Html, Properties, function_component, html};
use yew_router::prelude::Redirect;

/// What a guard does for a given token.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Render,
    Redirect(MainRoute),
}

fn has_token(token: Option<&str>) -> bool {
    token.is_some_and(|value| !value.is_empty())
}

/// Guest-only areas send signed-in users to the application root.
pub fn guest_only(token: Option<&str>) -> GuardDecision {
    if has_token(token) {
        GuardDecision::Redirect(MainRoute::Home)
    } else {
        GuardDecision::Render
    }
}

/// Authenticated areas send anonymous visitors to the login page.
pub fn require_auth(token: Option<&str>) -> GuardDecision {
    if has_token(token) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(MainRoute::Login)
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    #[prop_or_default]
    pub token: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps guest routes such as login and signup.
#[function_component(GuestLayout)]
pub fn guest_layout(props: &GuardProps) -> Html {
    match guest_only(props.token.as_deref()) {
        GuardDecision::Redirect(to) => html! { <Redirect<MainRoute> {to} /> },
        GuardDecision::Render => html! {
            <div id="guestLayout" class="flex items-center justify-center min-h-screen bg-base-200">
                {props.children.clone()}
            </div>
        },
    }
}

/// Wraps routes that need a signed-in user.
#[function_component(RequireAuth)]
pub fn require_auth_guard(props: &GuardProps) -> Html {
    match require_auth(props.token.as_deref()) {
        GuardDecision::Redirect(to) => html! { <Redirect<MainRoute> {to} /> },
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
    }
}
