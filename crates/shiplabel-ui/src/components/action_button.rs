use crate::view_model::ButtonView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ActionButtonProps {
    pub view: ButtonView,
    #[prop_or_default]
    pub outlined: bool,
    pub on_click: Callback<()>,
}

/// Button that swaps its caption for a spinner while busy.
#[function_component(ActionButton)]
pub(crate) fn action_button(props: &ActionButtonProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };
    let variant = if props.outlined { "outlined" } else { "contained" };
    let view = props.view;

    html! {
        <button
            type="button"
            class={classes!("btn", variant)}
            disabled={view.disabled || view.busy}
            aria-busy={view.busy.to_string()}
            {onclick}
        >
            {if view.busy {
                html! { <span class="spinner" aria-label={view.caption}></span> }
            } else {
                html! { {view.caption} }
            }}
        </button>
    }
}
