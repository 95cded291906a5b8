//! Create and edit users, several at a time.
//!
//! When mounted with an id the existing user is fetched first and becomes the
//! only draft. "Save All" sends one request per draft that takes part in the
//! batch, then returns to the user list.

use crate::api::UserDeskClient;
use crate::components::{Loading, ValidationAlert};
use crate::containers::user_drafts::DraftRow;
use crate::containers::user_form_state::{UserFormAction, UserFormState};
use crate::containers::user_sync::{SettleEffect, fetch_draft, settle, submit_drafts};
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use shared::models::{UserField, UserId};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[derive(Properties, PartialEq)]
pub struct UserFormPageProps {
    /// User being edited; `None` creates new users.
    #[prop_or_default]
    pub id: Option<UserId>,
    /// Session token sent with every request.
    #[prop_or_default]
    pub token: Option<AttrValue>,
    /// Publishes a notification to the session banner.
    #[prop_or_default]
    pub on_notify: Callback<String>,
}

#[function_component(UserFormPage)]
pub fn user_form_page(props: &UserFormPageProps) -> Html {
    let (i18n, _) = use_translation();
    let state = use_reducer(UserFormState::default);
    let navigator = use_navigator();
    let client = UserDeskClient::shared().with_token(props.token.as_deref().map(str::to_string));

    {
        let state = state.clone();
        let client = client.clone();
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                state.dispatch(UserFormAction::LoadStarted);
                spawn_local(async move {
                    let action = fetch_draft(&client, id).await;
                    state.dispatch(action);
                });
            }
            || ()
        });
    }

    let onsubmit = {
        let state = state.clone();
        let on_notify = props.on_notify.clone();
        let saved_message = i18n.t("user_form.saved");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !state.can_submit() {
                return;
            }
            let drafts = state.drafts.clone();
            state.dispatch(UserFormAction::SubmitStarted);

            let state = state.clone();
            let on_notify = on_notify.clone();
            let saved_message = saved_message.clone();
            let navigator = navigator.clone();
            let client = client.clone();
            spawn_local(async move {
                let (action, effect) = settle(submit_drafts(&client, &drafts).await);
                state.dispatch(action);
                if effect == Some(SettleEffect::NotifyAndLeave) {
                    on_notify.emit(saved_message);
                    if let Some(nav) = navigator {
                        nav.push(&MainRoute::Users);
                    }
                }
            });
        })
    };

    let on_add = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(UserFormAction::AddRow))
    };

    let on_remove = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(UserFormAction::RemoveLastRow))
    };

    let title = match props.id {
        Some(_) => format!(
            "{}: {}",
            i18n.t("user_form.update_title"),
            state.drafts.first().record.name
        ),
        None => i18n.t("user_form.new_title"),
    };

    let render_row = |row: &DraftRow| -> Html {
        let key = row.key;
        let is_last = state.drafts.is_last(key);
        let inputs = UserField::iter().map(|field| {
            let oninput = {
                let state = state.clone();
                Callback::from(move |event: InputEvent| {
                    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                        state.dispatch(UserFormAction::EditField {
                            key,
                            field,
                            value: input.value(),
                        });
                    }
                })
            };
            html! {
                <input
                    class="input input-bordered w-full"
                    name={field.as_str()}
                    type={field.input_type()}
                    placeholder={i18n.t(&format!("user_form.fields.{}", field.as_str()))}
                    value={row.record.field(field).to_string()}
                    {oninput}
                />
            }
        });

        html! {
            <div key={key.to_string()} class="flex flex-col gap-2 mb-4">
                { for inputs }
                if is_last {
                    <div class="flex gap-2">
                        <button
                            type="button"
                            class="btn"
                            onclick={on_add.clone()}
                            disabled={!state.drafts.can_add_row()}
                        >
                            {i18n.t("user_form.add_row")}
                        </button>
                        if state.drafts.can_remove_row() {
                            <button type="button" class="btn" onclick={on_remove.clone()}>
                                {i18n.t("user_form.remove_row")}
                            </button>
                        }
                    </div>
                }
            </div>
        }
    };

    html! {
        <div>
            <h1 class="text-2xl font-bold mb-4">{title}</h1>
            <div class="card bg-base-200 shadow-xl animate-fadeIn">
                <div class="card-body">
                    if state.is_loading() {
                        <Loading />
                    }
                    <ValidationAlert errors={state.errors.clone()} />
                    if !state.is_loading() {
                        <form {onsubmit}>
                            <button
                                type="submit"
                                class="btn btn-primary mb-4"
                                disabled={state.is_submitting()}
                            >
                                {i18n.t("user_form.save_all")}
                            </button>
                            { for state.drafts.rows().iter().map(render_row) }
                        </form>
                    }
                </div>
            </div>
        </div>
    }
}
