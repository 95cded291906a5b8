use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let on_logout = props.on_logout.reform(|event: MouseEvent| {
        event.prevent_default();
    });

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Users} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <ul class="menu menu-horizontal gap-2">
                <li>
                    <Link<MainRoute> to={MainRoute::Users} classes="btn btn-ghost btn-sm">
                        {i18n.t("header.users")}
                    </Link<MainRoute>>
                </li>
                <li>
                    <a href="#" class="btn btn-ghost btn-sm" onclick={on_logout}>
                        {i18n.t("header.logout")}
                    </a>
                </li>
            </ul>
        </nav>
    }
}
