use std::rc::Rc;

use log::{trace, warn};
use maze_core::style;
use maze_core::{Cell, Row};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::constants::*;
use crate::state::{DrawnRow, State};

/// Brings the board in line with the grid. Rows are compared by identity:
/// a row whose `Rc` is unchanged since the last draw is left alone.
pub fn draw(state: &mut State) -> Result<(), JsValue> {
    let grid = state.session.grid();
    let (height, width) = (grid.height(), grid.width());
    let same_shape = state.drawn.len() == height
        && state.drawn.iter().all(|d| d.cells.len() == width);

    if !same_shape {
        state.board.set_inner_html("");
        state.drawn.clear();
        // y grows upward, so the last row is drawn first
        for row in grid.rows().iter().rev() {
            let drawn = build_row(&state.document, &state.board, row, height, width)?;
            state.drawn.push(drawn);
        }
        state.drawn.reverse();
        if let Err(e) = state
            .board
            .style()
            .set_property("--maze-columns", &width.to_string())
        {
            warn!("could not set board columns: {e:?}");
        }
        return Ok(());
    }

    let mut updated = 0;
    for (drawn, row) in state.drawn.iter_mut().zip(grid.rows()) {
        if Rc::ptr_eq(&drawn.row, row) {
            continue;
        }
        for (el, cell) in drawn.cells.iter().zip(row.iter()) {
            el.set_class_name(&style::class_list(cell, height, width));
        }
        drawn.row = row.clone();
        updated += 1;
    }
    trace!("draw: {updated} rows updated");
    Ok(())
}

fn build_row(
    document: &Document,
    board: &HtmlElement,
    row: &Row,
    height: usize,
    width: usize,
) -> Result<DrawnRow, JsValue> {
    let row_el = document.create_element("div")?;
    row_el.set_class_name("maze-row");
    let mut cells = Vec::with_capacity(row.len());
    for cell in row.iter() {
        let el = build_cell(document, cell, height, width)?;
        row_el.append_child(&el)?;
        cells.push(el);
    }
    board.append_child(&row_el)?;
    Ok(DrawnRow {
        row: row.clone(),
        cells,
    })
}

fn build_cell(
    document: &Document,
    cell: &Cell,
    height: usize,
    width: usize,
) -> Result<Element, JsValue> {
    let el = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    el.set_class_name(&style::class_list(cell, height, width));
    let data = el.dataset();
    data.set("x", &cell.x.to_string())?;
    data.set("y", &cell.y.to_string())?;
    Ok(el.into())
}

/// Refreshes every message area and the load button from the session.
pub fn update_messages(state: &State) {
    let session = &state.session;
    set_text(
        &state.document,
        DIMENSION_MESSAGE_ID,
        session.dimension_message().unwrap_or(""),
    );
    set_text(
        &state.document,
        DIRECTORY_MESSAGE_ID,
        session.directory_message().unwrap_or(""),
    );
    set_text(&state.document, NOTICE_ID, session.notice().unwrap_or(""));
    set_text(
        &state.document,
        STATUS_ID,
        state.status.as_deref().unwrap_or(""),
    );
    if let Some(button) = state.document.get_element_by_id(LOAD_BUTTON_ID) {
        let toggled = if session.loading_enabled() {
            button.remove_attribute("disabled")
        } else {
            button.set_attribute("disabled", "")
        };
        if let Err(e) = toggled {
            warn!("could not toggle load button: {e:?}");
        }
    }
}

fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn input_value(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

pub fn set_input_value(document: &Document, id: &str, value: &str) {
    if let Some(input) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}
