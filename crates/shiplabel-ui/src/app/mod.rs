use crate::app::api::ApiCtx;
use crate::components::error_banner::ErrorBanner;
use crate::components::label_form::LabelForm;
use crate::components::label_preview::LabelPreview;
use crate::components::login::LoginCard;
use crate::config::backend_config;
use crate::services::download::BrowserDownload;
use crate::store::{self, AppStore};
use crate::view_model::{
    APP_TITLE, TabView, back_button, download_button, form_sections, generate_button, preview,
    tab_views,
};
use shiplabel_core::{LabelBackend, StubAuthenticator, Tab, download_to_sink};
use shiplabel_models::LabelField;
use yew::prelude::*;
use yewdux::prelude::use_store;

mod api;

#[function_component(LabelApp)]
pub fn label_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(backend_config()), ());
    let (app, dispatch) = use_store::<AppStore>();

    if !app.session.is_authenticated {
        let on_login = {
            let dispatch = dispatch.clone();
            Callback::from(move |()| {
                dispatch.reduce_mut(|state| store::login(state, &StubAuthenticator));
            })
        };
        return html! { <LoginCard {on_login} /> };
    }

    let on_tab = {
        let dispatch = dispatch.clone();
        Callback::from(move |tab: Tab| {
            dispatch.reduce_mut(|state| store::select_tab(state, tab));
        })
    };
    let on_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |(field, value): (LabelField, String)| {
            dispatch.reduce_mut(|state| store::update_field(state, field, value));
        })
    };
    let on_submit = {
        let dispatch = dispatch.clone();
        let client = api_ctx.client.clone();
        Callback::from(move |()| {
            let mut request = None;
            dispatch.reduce_mut(|state| request = store::begin_submit(state));
            let Some(request) = request else {
                return;
            };
            let dispatch = dispatch.clone();
            let client = client.clone();
            yew::platform::spawn_local(async move {
                let outcome = client.generate_label(&request).await;
                if let Err(err) = &outcome {
                    gloo::console::error!(format!("Error: label generation failed: {err:?}"));
                }
                dispatch.reduce_mut(|state| store::finish_submit(state, outcome));
            });
        })
    };
    let on_download = {
        let dispatch = dispatch.clone();
        let client = api_ctx.client.clone();
        Callback::from(move |()| {
            let mut label = None;
            dispatch.reduce_mut(|state| label = store::begin_download(state));
            let Some(label) = label else {
                return;
            };
            let dispatch = dispatch.clone();
            let client = client.clone();
            yew::platform::spawn_local(async move {
                let outcome = download_to_sink(&*client, &BrowserDownload, &label).await;
                if let Err(err) = &outcome {
                    gloo::console::error!(format!("Error: label download failed: {err:?}"));
                }
                dispatch.reduce_mut(|state| store::finish_download(state, outcome));
            });
        })
    };
    let on_back = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(store::back_to_form))
    };

    let workflow = &app.workflow;
    let body = match workflow.tab() {
        Tab::OrderForm => html! {
            <LabelForm
                sections={Vec::from(form_sections(workflow))}
                submit={generate_button(workflow)}
                {on_change}
                {on_submit}
            />
        },
        Tab::LabelPreview => html! {
            <LabelPreview
                preview={preview(workflow)}
                download={download_button(workflow)}
                back={back_button(workflow)}
                {on_download}
                {on_back}
            />
        },
    };

    html! {
        <div class="container">
            <div class="card">
                <h1 class="title">{APP_TITLE}</h1>
                <ErrorBanner message={workflow.error_message()} />
                <div class="tabs" role="tablist">
                    {for tab_views(workflow).into_iter().map(|view| render_tab(view, &on_tab))}
                </div>
                {body}
            </div>
        </div>
    }
}

fn render_tab(view: TabView, on_tab: &Callback<Tab>) -> Html {
    let onclick = {
        let on_tab = on_tab.clone();
        let tab = view.tab;
        Callback::from(move |_: MouseEvent| on_tab.emit(tab))
    };
    html! {
        <button
            type="button"
            role="tab"
            class={classes!("tab", view.selected.then_some("selected"))}
            aria-selected={view.selected.to_string()}
            {onclick}
        >
            {view.title}
        </button>
    }
}

/// Entrypoint for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    crate::logging::init_console_logging();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<LabelApp>::with_root(root).render();
    } else {
        yew::Renderer::<LabelApp>::new().render();
    }
}
