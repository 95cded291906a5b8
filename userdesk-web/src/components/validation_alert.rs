use shared::models::ValidationErrors;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ValidationAlertProps {
    #[prop_or_default]
    pub errors: Option<ValidationErrors>,
}

/// `(field, message)` pairs to render: the first message of each field.
pub fn alert_lines(errors: &ValidationErrors) -> Vec<(String, String)> {
    errors
        .first_messages()
        .map(|(field, message)| (field.to_string(), message.to_string()))
        .collect()
}

/// Backend validation messages, one line per field.
#[function_component(ValidationAlert)]
pub fn validation_alert(props: &ValidationAlertProps) -> Html {
    let Some(errors) = props.errors.as_ref() else {
        return html! {};
    };

    html! {
        <div class="alert alert-error flex-col items-start mb-4" role="alert">
            { for alert_lines(errors).into_iter().map(|(field, message)| html! {
                <p key={field.clone()} data-field={field}>{message}</p>
            }) }
        </div>
    }
}
