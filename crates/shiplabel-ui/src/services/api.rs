//! HTTP client for the label backend (REST over `gloo-net`).

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use shiplabel_config::BackendConfig;
use shiplabel_core::{BackendError, DOWNLOAD_OPERATION, GENERATE_OPERATION, LabelBackend};
use shiplabel_models::{LABEL_CONTENT_TYPE, LabelRequest, LabelResponse};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: BackendConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl LabelBackend for ApiClient {
    async fn generate_label(&self, request: &LabelRequest) -> Result<LabelResponse, BackendError> {
        let response = Request::post(self.config.generate_url().as_str())
            .json(request)
            .map_err(|err| transport(GENERATE_OPERATION, &err))?
            .send()
            .await
            .map_err(|err| transport(GENERATE_OPERATION, &err))?;
        ensure_ok(GENERATE_OPERATION, &response)?;
        response
            .json::<LabelResponse>()
            .await
            .map_err(|err| BackendError::Decode {
                operation: GENERATE_OPERATION,
                detail: err.to_string(),
            })
    }

    async fn download_label(&self, delivery_id: &str) -> Result<Vec<u8>, BackendError> {
        let url = self
            .config
            .download_url(delivery_id)
            .map_err(|err| BackendError::InvalidRequest {
                operation: DOWNLOAD_OPERATION,
                detail: err.to_string(),
            })?;
        let response = Request::get(url.as_str())
            .header("Accept", LABEL_CONTENT_TYPE)
            .send()
            .await
            .map_err(|err| transport(DOWNLOAD_OPERATION, &err))?;
        ensure_ok(DOWNLOAD_OPERATION, &response)?;
        response
            .binary()
            .await
            .map_err(|err| transport(DOWNLOAD_OPERATION, &err))
    }
}

fn transport(operation: &'static str, err: &gloo_net::Error) -> BackendError {
    BackendError::Transport {
        operation,
        detail: err.to_string(),
    }
}

fn ensure_ok(operation: &'static str, response: &Response) -> Result<(), BackendError> {
    if response.ok() {
        Ok(())
    } else {
        Err(BackendError::Status {
            operation,
            status: response.status(),
        })
    }
}
