use fingerprint_common::error::ServiceError;
use fingerprint_common::request::FormField;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, FormData, Request, RequestInit, Response};

/// POST `fields` as multipart/form-data and return the body text.
///
/// The HTTP status is deliberately not checked: the service reports failures
/// in the body, and the decoder decides. A request still pending after
/// `timeout_ms` is aborted and reported as [`ServiceError::Timeout`].
pub async fn post_form(
    url: &str,
    fields: &[FormField],
    timeout_ms: u32,
) -> Result<String, ServiceError> {
    let form = FormData::new().map_err(transport)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(transport)?;
    }

    let signal = AbortSignal::timeout_with_u32(timeout_ms);

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);
    opts.set_signal(Some(&signal));

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;

    let window = web_sys::window().ok_or(ServiceError::Transport("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| aborted_or_transport(e, &signal, timeout_ms))?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if !resp.ok() {
        tracing::debug!("{} answered HTTP {}", url, resp.status());
    }

    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(|e| aborted_or_transport(e, &signal, timeout_ms))?;
    text.as_string()
        .ok_or(ServiceError::Decode("response not string".into()))
}

fn aborted_or_transport(e: JsValue, signal: &AbortSignal, timeout_ms: u32) -> ServiceError {
    if signal.aborted() {
        ServiceError::Timeout(timeout_ms)
    } else {
        transport(e)
    }
}

fn transport(e: JsValue) -> ServiceError {
    ServiceError::Transport(js_message(&e))
}

fn js_message(e: &JsValue) -> String {
    if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
