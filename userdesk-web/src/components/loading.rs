use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex flex-col items-center justify-center py-10 animate-fadeIn">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex items-center gap-2">
                <span class="loading loading-dots loading-md"></span>
                <span class="text-center">{i18n.t("common.loading")}</span>
            </div>
        </div>
    }
}
