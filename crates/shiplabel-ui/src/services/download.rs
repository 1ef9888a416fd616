//! Hands downloaded PDFs to the browser as a file save.

use js_sys::{Array, Uint8Array};
use shiplabel_core::{LabelSink, SaveError};
use shiplabel_models::LABEL_CONTENT_TYPE;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// [`LabelSink`] that triggers a browser download through a temporary object URL.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserDownload;

impl LabelSink for BrowserDownload {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<(), SaveError> {
        let blob = pdf_blob(bytes)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(browser_error)?;
        let clicked = click_link(&url, file_name);
        // Revoke even when the click failed.
        let revoked = Url::revoke_object_url(&url).map_err(browser_error);
        clicked.and(revoked)
    }
}

fn pdf_blob(bytes: &[u8]) -> Result<Blob, SaveError> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes).into());
    let options = BlobPropertyBag::new();
    options.set_type(LABEL_CONTENT_TYPE);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(browser_error)
}

fn click_link(url: &str, file_name: &str) -> Result<(), SaveError> {
    let document = gloo::utils::document();
    let body = gloo::utils::body();
    let anchor = document
        .create_element("a")
        .map_err(browser_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| SaveError::Browser {
            detail: "anchor element unavailable".to_string(),
        })?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(browser_error)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

fn browser_error(err: JsValue) -> SaveError {
    SaveError::Browser {
        detail: format!("{err:?}"),
    }
}
