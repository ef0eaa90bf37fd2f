use maze_core::{MazeSession, Row};
use web_sys::{Document, Element, HtmlElement, Window};

/// A grid row as it is currently shown, with the elements drawn for it.
pub struct DrawnRow {
    pub row: Row,
    pub cells: Vec<Element>,
}

/// Application state shared across the WASM callbacks behind an
/// `Rc<RefCell<_>>`.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub board: HtmlElement,
    pub service_base: String,
    pub session: MazeSession,
    pub drawn: Vec<DrawnRow>,
    pub status: Option<String>,
}
