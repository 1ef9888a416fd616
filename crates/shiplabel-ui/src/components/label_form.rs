use crate::components::action_button::ActionButton;
use crate::view_model::{ButtonView, FieldView, FormSection};
use shiplabel_models::LabelField;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LabelFormProps {
    pub sections: Vec<FormSection>,
    pub submit: ButtonView,
    pub on_change: Callback<(LabelField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(LabelForm)]
pub(crate) fn label_form(props: &LabelFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="label-form" {onsubmit}>
            {for props.sections.iter().map(|section| render_section(section, &props.on_change))}
            <div class="actions">
                <ActionButton view={props.submit} on_click={props.on_submit.clone()} />
            </div>
        </form>
    }
}

fn render_section(section: &FormSection, on_change: &Callback<(LabelField, String)>) -> Html {
    html! {
        <section class="form-section">
            <h2>{section.heading}</h2>
            {for section.fields.iter().map(|field| render_field(field, on_change))}
        </section>
    }
}

fn render_field(view: &FieldView, on_change: &Callback<(LabelField, String)>) -> Html {
    let field = view.field;
    let control = if let Some(rows) = view.rows {
        let on_change = on_change.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                on_change.emit((field, input.value()));
            }
        });
        html! {
            <textarea
                id={view.name}
                name={view.name}
                rows={rows.to_string()}
                value={view.value.clone()}
                required=true
                disabled={view.disabled}
                {oninput}
            />
        }
    } else {
        let on_change = on_change.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_change.emit((field, input.value()));
            }
        });
        html! {
            <input
                type="text"
                id={view.name}
                name={view.name}
                value={view.value.clone()}
                required=true
                disabled={view.disabled}
                {oninput}
            />
        }
    };

    html! {
        <label class="field">
            <span>{view.label}{" *"}</span>
            {control}
        </label>
    }
}
