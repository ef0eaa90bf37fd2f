//! Client-side state for the maze viewer: the cell model, the wall style
//! rules, the copy-on-write grid, the start/end selection machine and the
//! solver path overlay. Nothing in here touches the browser, so the whole
//! crate is testable on the host.

pub mod cell;
pub mod epoch;
pub mod error;
pub mod grid;
pub mod messages;
pub mod overlay;
pub mod protocol;
pub mod selection;
pub mod session;
pub mod style;

pub use cell::{Cell, Coord};
pub use epoch::{Epoch, EpochCounter, Ticket};
pub use error::{MazeError, Result};
pub use grid::{GridState, MAX_DIMENSION, MIN_DIMENSION, Row};
pub use messages::{Lang, Message};
pub use overlay::ApplyReport;
pub use protocol::{DirectoryRequest, LoadRequest, PathRequest};
pub use selection::{PathTicket, Phase, Selection, SelectionController};
pub use session::{LoadTicket, MazeSession, NoticeToken};
pub use style::Tag;
