use crate::components::NotificationBanner;
use crate::containers::header::Header;
use crate::models::session::SessionHandle;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub session: SessionHandle,
}

/// Shell for signed-in pages: header, notification banner and content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", "dark")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
    <>
        <Header on_logout={props.session.on_logout.clone()} />
        <NotificationBanner
            notification={props.session.notification.clone()}
            on_dismiss={props.session.on_dismiss.clone()}
        />
        <div class="min-h-screen bg-base-100">
            <main class={classes!("flex-grow", "p-4", "max-w-5xl", "mx-auto")}>
                {props.children.clone()}
            </main>
        </div>
    </>
    }
}
