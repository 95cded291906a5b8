use i18nrs::yew::use_translation;
use yew::{Html, Properties, function_component, html};

/// Which guest screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestPageKind {
    Login,
    Signup,
}

impl GuestPageKind {
    fn translation_prefix(self) -> &'static str {
        match self {
            Self::Login => "guest.login",
            Self::Signup => "guest.signup",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GuestPageProps {
    pub kind: GuestPageKind,
}

/// Content rendered inside the guest layout.
#[function_component(GuestPage)]
pub fn guest_page(props: &GuestPageProps) -> Html {
    let (i18n, _) = use_translation();
    let prefix = props.kind.translation_prefix();

    html! {
        <div class="card w-full max-w-md shadow-lg bg-base-100">
            <div class="card-body">
                <h2 class="card-title text-2xl">{ i18n.t(&format!("{prefix}.title")) }</h2>
                <p>{ i18n.t(&format!("{prefix}.description")) }</p>
            </div>
        </div>
    }
}
