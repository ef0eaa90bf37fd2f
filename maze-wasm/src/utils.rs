use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Window};

/// Base URL for the maze service. The host page may set `window.__BASE_URL`;
/// otherwise requests go relative to the page itself.
pub fn service_base(window: &Window) -> String {
    let base = js_sys::Reflect::get(window, &JsValue::from_str("__BASE_URL"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| {
            let loc = window.location();
            let origin = loc.origin().ok()?;
            let path = loc.pathname().ok()?;
            Some(format!("{origin}{path}"))
        })
        .unwrap_or_else(|| "/".to_string());
    if base.ends_with('/') {
        base
    } else {
        format!("{}/", base)
    }
}

pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path.trim_start_matches('/'))
}

/// Issues a GET, or a JSON POST when `body` is given. Returns the status
/// code and the response text.
pub async fn fetch_text(
    window: &Window,
    url: &str,
    body: Option<String>,
) -> Result<(u16, String), JsValue> {
    let init = RequestInit::new();
    match &body {
        Some(b) => {
            init.set_method("POST");
            init.set_body(&JsValue::from_str(b));
        }
        None => init.set_method("GET"),
    }
    let request = Request::new_with_str_and_init(url, &init)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let text = JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok((resp.status(), text))
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}
