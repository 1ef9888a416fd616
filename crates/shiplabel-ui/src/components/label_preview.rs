use crate::components::action_button::ActionButton;
use crate::components::barcode::Barcode;
use crate::view_model::{AddressBlock, ButtonView, PreviewView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LabelPreviewProps {
    pub preview: Option<PreviewView>,
    pub download: ButtonView,
    pub back: ButtonView,
    pub on_download: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component(LabelPreview)]
pub(crate) fn label_preview(props: &LabelPreviewProps) -> Html {
    // Nothing to show until a label has been issued.
    let Some(view) = &props.preview else {
        return html! { <div class="preview-empty"></div> };
    };

    html! {
        <div class="label-preview">
            <div class="card">
                <h2>{"Delivery Label Preview"}</h2>
                <p class="subtitle">{view.heading.clone()}</p>
                <Barcode value={AttrValue::from(view.barcode.clone())} />
                <div class="address-grid">
                    {render_block(&view.from)}
                    {render_block(&view.to)}
                </div>
            </div>
            <div class="actions">
                <ActionButton view={props.download} on_click={props.on_download.clone()} />
                <ActionButton view={props.back} outlined=true on_click={props.on_back.clone()} />
            </div>
        </div>
    }
}

fn render_block(block: &AddressBlock) -> Html {
    html! {
        <div>
            <h3>{block.caption}</h3>
            <p>{block.name.clone()}</p>
            <p class="address">{block.address.clone()}</p>
        </div>
    }
}
