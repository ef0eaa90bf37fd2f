use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use maze_core::{LoadTicket, MazeError, PathTicket};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use crate::api;
use crate::constants::*;
use crate::render::{draw, input_value, set_input_value, update_messages};
use crate::state::State;

type Shared = Rc<RefCell<State>>;

fn on<E, F>(document: &Document, id: &str, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let Some(el) = document.get_element_by_id(id) else {
        warn!("element #{id} not found, {event} handler not attached");
        return Ok(());
    };
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Wires the board and the form controls to the session.
pub fn attach_ui(state: Shared) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    let st = state.clone();
    on(&doc, BOARD_ID, "click", move |e: MouseEvent| {
        let Some(target) = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let data = target.dataset();
        let coord = |k: &str| data.get(k).and_then(|v| v.parse::<usize>().ok());
        if let (Some(x), Some(y)) = (coord("x"), coord("y")) {
            select_cell(&st, x, y);
        }
    })?;

    for id in [HEIGHT_INPUT_ID, WIDTH_INPUT_ID] {
        let st = state.clone();
        on(&doc, id, "input", move |_e: Event| {
            let mut s = st.borrow_mut();
            read_dimensions(&mut s);
            update_messages(&s);
        })?;
        // committing a new size reloads the maze
        let st = state.clone();
        on(&doc, id, "change", move |_e: Event| start_load(&st))?;
    }

    let st = state.clone();
    on(&doc, LOAD_BUTTON_ID, "click", move |_e: MouseEvent| {
        start_load(&st)
    })?;

    let st = state.clone();
    on(&doc, DIRECTORY_BUTTON_ID, "click", move |_e: MouseEvent| {
        let dir = input_value(&st.borrow().document, DIRECTORY_INPUT_ID).unwrap_or_default();
        wasm_bindgen_futures::spawn_local(set_directory(st.clone(), dir));
    })?;

    let st = state.clone();
    on(&doc, EXPORT_BUTTON_ID, "click", move |_e: MouseEvent| {
        wasm_bindgen_futures::spawn_local(export_image(st.clone()));
    })?;

    Ok(())
}

fn read_dimensions(s: &mut State) {
    let h = input_value(&s.document, HEIGHT_INPUT_ID).unwrap_or_default();
    let w = input_value(&s.document, WIDTH_INPUT_ID).unwrap_or_default();
    s.session.set_dimension_input(&h, &w);
}

/// Shows `err` in the status line unless it is one the user never sees.
fn report(s: &mut State, err: &MazeError) {
    match s.session.describe(err) {
        Some(text) => {
            warn!("{err}");
            s.status = Some(text);
        }
        None => debug!("ignored: {err}"),
    }
    update_messages(s);
}

fn redraw(s: &mut State) {
    if let Err(e) = draw(s) {
        warn!("draw failed: {e:?}");
    }
}

fn select_cell(state: &Shared, x: usize, y: usize) {
    let result = {
        let mut s = state.borrow_mut();
        let result = s.session.click(x, y);
        redraw(&mut s);
        result
    };
    match result {
        Ok(Some(ticket)) => wasm_bindgen_futures::spawn_local(request_path(state.clone(), ticket)),
        Ok(None) => {}
        Err(e) => report(&mut state.borrow_mut(), &e),
    }
}

pub fn start_load(state: &Shared) {
    let ticket = {
        let mut s = state.borrow_mut();
        read_dimensions(&mut s);
        s.session.begin_load()
    };
    match ticket {
        Ok(ticket) => wasm_bindgen_futures::spawn_local(load_grid(state.clone(), ticket)),
        Err(e) => report(&mut state.borrow_mut(), &e),
    }
}

async fn load_grid(state: Shared, ticket: LoadTicket) {
    let (window, base) = {
        let s = state.borrow();
        (s.window.clone(), s.service_base.clone())
    };
    let rows = api::fetch_grid(&window, &base, &ticket.payload).await;
    let mut s = state.borrow_mut();
    match rows {
        Ok(rows) => match s.session.finish_load(&ticket, rows) {
            Ok(()) => {
                s.status = None;
                redraw(&mut s);
                update_messages(&s);
            }
            Err(e) => report(&mut s, &e),
        },
        Err(e) => warn!("grid request failed: {e:?}"),
    }
}

async fn request_path(state: Shared, ticket: PathTicket) {
    let (window, base) = {
        let s = state.borrow();
        (s.window.clone(), s.service_base.clone())
    };
    let path = api::fetch_path(&window, &base, &ticket.payload).await;
    let mut s = state.borrow_mut();
    match path {
        Ok(path) => match s.session.finish_path(&ticket, &path) {
            Ok(applied) => {
                if !applied.skipped.is_empty() {
                    warn!("{} path cells were outside the maze", applied.skipped.len());
                }
                redraw(&mut s);
            }
            Err(e) => report(&mut s, &e),
        },
        Err(e) => warn!("path request failed: {e:?}"),
    }
}

async fn set_directory(state: Shared, dir: String) {
    let (window, base) = {
        let s = state.borrow();
        (s.window.clone(), s.service_base.clone())
    };
    let outcome = api::set_directory(&window, &base, &dir).await;
    {
        let mut s = state.borrow_mut();
        match outcome {
            Ok(Ok(resolved)) => {
                set_input_value(&s.document, DIRECTORY_INPUT_ID, &resolved);
                s.session.directory_accepted(resolved);
                update_messages(&s);
            }
            Ok(Err(reason)) => {
                s.session.directory_rejected(&reason);
                update_messages(&s);
                return;
            }
            Err(e) => {
                let err = s.session.directory_rejected(&format!("{e:?}"));
                report(&mut s, &err);
                return;
            }
        }
    }
    info!("loading maze after directory change");
    start_load(&state);
}

async fn export_image(state: Shared) {
    let (window, base) = {
        let s = state.borrow();
        (s.window.clone(), s.service_base.clone())
    };
    match api::export_image(&window, &base).await {
        Ok(true) => {
            let token = {
                let mut s = state.borrow_mut();
                let token = s.session.export_succeeded();
                update_messages(&s);
                token
            };
            let st = state.clone();
            let hide = Closure::once_into_js(move || {
                let mut s = st.borrow_mut();
                s.session.dismiss_notice(token);
                update_messages(&s);
            });
            if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.unchecked_ref(),
                NOTICE_MS,
            ) {
                warn!("could not schedule notice dismissal: {e:?}");
            }
        }
        Ok(false) => warn!("image export was refused"),
        Err(e) => warn!("image export failed: {e:?}"),
    }
}
