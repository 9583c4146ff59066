use crate::api::{ApiError, ApiRequest, ApiResponse, Fetch};
use async_trait::async_trait;
use http::StatusCode;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, Window};

/// `Fetch` over the page's own `window.fetch`.
pub struct BrowserFetch {
    window: Window,
}

impl BrowserFetch {
    pub fn new(window: Window) -> Self {
        BrowserFetch { window }
    }
}

fn transport(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

fn build_request(request: &ApiRequest) -> Result<Request, JsValue> {
    let init = RequestInit::new();
    init.set_method(request.method.as_str());

    let headers = Headers::new()?;
    headers.set("accept", "application/json")?;
    if let Some(body) = &request.body {
        headers.set("content-type", "application/json")?;
        init.set_body(&JsValue::from_str(body));
    }
    init.set_headers(&headers);

    Request::new_with_str_and_init(request.url.as_str(), &init)
}

#[async_trait(?Send)]
impl Fetch for BrowserFetch {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let req = build_request(&request).map_err(transport)?;
        let resp_value = JsFuture::from(self.window.fetch_with_request(&req))
            .await
            .map_err(transport)?;
        let resp: Response = resp_value.dyn_into().map_err(transport)?;

        let status = StatusCode::from_u16(resp.status())
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let text_promise = resp.text().map_err(transport)?;
        let body = JsFuture::from(text_promise)
            .await
            .map_err(transport)?
            .as_string()
            .unwrap_or_default();

        Ok(ApiResponse { status, body })
    }
}
