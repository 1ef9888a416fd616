use crate::services::barcode::render_barcode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BarcodeProps {
    pub value: AttrValue,
}

/// `<svg>` filled by JsBarcode whenever the value changes.
#[function_component(Barcode)]
pub(crate) fn barcode(props: &BarcodeProps) -> Html {
    let svg = use_node_ref();
    {
        let svg = svg.clone();
        use_effect_with_deps(
            move |value: &AttrValue| {
                if let Some(element) = svg.cast::<web_sys::Element>() {
                    if let Err(err) = render_barcode(&element, value) {
                        gloo::console::error!(format!("barcode rendering failed: {err:?}"));
                    }
                }
                || ()
            },
            props.value.clone(),
        );
    }

    html! {
        <svg ref={svg} class="barcode" role="img" aria-label={props.value.clone()}></svg>
    }
}
