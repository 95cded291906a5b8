use crate::components::{GuestLayout, RequireAuth};
use crate::containers::layout::Layout;
use crate::models::session::SessionHandle;
use crate::pages::{ErrorPage, GuestPage, GuestPageKind, UserFormPage, UsersPage};
use shared::models::UserId;
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/users")]
    Users,
    #[at("/users/new")]
    UserNew,
    #[at("/users/:id")]
    UserEdit { id: UserId },
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn authenticated(session: &SessionHandle, content: Html) -> Html {
    html! {
        <RequireAuth token={session.token.clone()}>
            <Layout session={session.clone()}>
                {content}
            </Layout>
        </RequireAuth>
    }
}

fn guest(session: &SessionHandle, kind: GuestPageKind) -> Html {
    html! {
        <GuestLayout token={session.token.clone()}>
            <GuestPage {kind} />
        </GuestLayout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute, session: &SessionHandle) -> Html {
    log::debug!("switching to route {route:?}");
    match route {
        MainRoute::Home => authenticated(
            session,
            html! { <Redirect<MainRoute> to={MainRoute::Users} /> },
        ),
        MainRoute::Users => authenticated(session, html! { <UsersPage /> }),
        MainRoute::UserNew => authenticated(
            session,
            html! { <UserFormPage token={session.token.clone()} on_notify={session.on_notify.clone()} /> },
        ),
        MainRoute::UserEdit { id } => authenticated(
            session,
            html! {
                <UserFormPage
                    key={id.to_string()}
                    id={Some(id)}
                    token={session.token.clone()}
                    on_notify={session.on_notify.clone()}
                />
            },
        ),
        MainRoute::Login => guest(session, GuestPageKind::Login),
        MainRoute::Signup => guest(session, GuestPageKind::Signup),
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}
