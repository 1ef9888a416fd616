use crate::view_model::APP_TITLE;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoginCardProps {
    pub on_login: Callback<()>,
}

/// Session gate shown until the login trigger fires.
#[function_component(LoginCard)]
pub(crate) fn login_card(props: &LoginCardProps) -> Html {
    let onclick = {
        let on_login = props.on_login.clone();
        Callback::from(move |_: MouseEvent| on_login.emit(()))
    };

    html! {
        <div class="container">
            <div class="card" role="dialog" aria-modal="true">
                <header>
                    <h1>{APP_TITLE}</h1>
                </header>
                <p class="muted">{"Sign in to create and print delivery labels."}</p>
                <div class="actions">
                    <button type="button" class="btn contained" {onclick}>{"Login"}</button>
                </div>
            </div>
        </div>
    }
}
