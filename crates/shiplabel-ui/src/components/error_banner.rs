use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorBannerProps {
    pub message: Option<&'static str>,
}

#[function_component(ErrorBanner)]
pub(crate) fn error_banner(props: &ErrorBannerProps) -> Html {
    props.message.map_or_else(
        || html! {},
        |message| {
            html! {
                <div class="alert-error" role="alert">{message}</div>
            }
        },
    )
}
