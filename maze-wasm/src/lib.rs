use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use maze_core::MazeSession;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

mod api;
mod config;
mod constants;
mod logger;
mod render;
mod state;
mod ui;
mod utils;

use crate::config::PageConfig;
use crate::constants::{BOARD_ID, HEIGHT_INPUT_ID, WIDTH_INPUT_ID};
use crate::state::State;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let config = PageConfig::from_window(&window);
    logger::init(config.log_level);

    let board = document
        .get_element_by_id(BOARD_ID)
        .ok_or_else(|| JsValue::from_str("board #maze not found"))?
        .dyn_into::<HtmlElement>()?;
    render::set_input_value(&document, HEIGHT_INPUT_ID, &config.height.to_string());
    render::set_input_value(&document, WIDTH_INPUT_ID, &config.width.to_string());

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        board,
        service_base: config.service_base.clone(),
        session: MazeSession::new(config.lang, config.height, config.width),
        drawn: Vec::new(),
        status: None,
    }));
    ui::attach_ui(state.clone())?;
    render::update_messages(&state.borrow());
    info!(
        "maze viewer ready, service at {}, {}x{}",
        config.service_base, config.height, config.width
    );
    Ok(())
}
