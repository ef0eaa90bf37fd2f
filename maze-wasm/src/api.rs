//! Calls to the maze service. Only success versus failure is looked at.

use maze_core::protocol::{
    self, DIRECTORY_ENDPOINT, DirectoryAccepted, DirectoryFailure, DirectoryRequest,
    GRID_ENDPOINT, IMAGE_ENDPOINT, PATH_ENDPOINT,
};
use maze_core::{Cell, Coord, LoadRequest, PathRequest};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::utils::{endpoint_url, fetch_text};

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

pub async fn fetch_grid(
    window: &Window,
    base: &str,
    req: &LoadRequest,
) -> Result<Vec<Vec<Cell>>, JsValue> {
    let url = format!("{}?{}", endpoint_url(base, GRID_ENDPOINT), req.query_string());
    let (status, text) = fetch_text(window, &url, None).await?;
    if !is_success(status) {
        return Err(JsValue::from_str(&format!("grid source answered {status}")));
    }
    protocol::parse_grid(&text).map_err(to_js)
}

pub async fn fetch_path(
    window: &Window,
    base: &str,
    req: &PathRequest,
) -> Result<Vec<Coord>, JsValue> {
    let body = serde_json::to_string(req).map_err(to_js)?;
    let (status, text) =
        fetch_text(window, &endpoint_url(base, PATH_ENDPOINT), Some(body)).await?;
    if !is_success(status) {
        return Err(JsValue::from_str(&format!("path solver answered {status}")));
    }
    protocol::parse_path(&text).map_err(to_js)
}

pub async fn export_image(window: &Window, base: &str) -> Result<bool, JsValue> {
    let (status, _) = fetch_text(window, &endpoint_url(base, IMAGE_ENDPOINT), None).await?;
    Ok(is_success(status))
}

/// `Ok(Ok(dir))` with the resolved directory, `Ok(Err(reason))` when the
/// service refused it.
pub async fn set_directory(
    window: &Window,
    base: &str,
    dir: &str,
) -> Result<Result<String, String>, JsValue> {
    let body = serde_json::to_string(&DirectoryRequest {
        dir: dir.to_string(),
    })
    .map_err(to_js)?;
    let (status, text) =
        fetch_text(window, &endpoint_url(base, DIRECTORY_ENDPOINT), Some(body)).await?;
    if is_success(status) {
        let resolved = serde_json::from_str::<DirectoryAccepted>(&text)
            .map(|a| a.directory)
            .unwrap_or_else(|_| dir.to_string());
        Ok(Ok(resolved))
    } else {
        let failure = serde_json::from_str::<DirectoryFailure>(&text).unwrap_or_default();
        Ok(Err(failure.error))
    }
}
