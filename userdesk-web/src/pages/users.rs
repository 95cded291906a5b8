use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// Landing page for signed-in users; the form returns here after saving.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{ i18n.t("users.title") }</h1>
                <Link<MainRoute> to={MainRoute::UserNew} classes="btn btn-primary">
                    { i18n.t("users.add_new") }
                </Link<MainRoute>>
            </div>
        </div>
    }
}
