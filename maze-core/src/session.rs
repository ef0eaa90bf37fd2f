//! Everything the page keeps between events, in one place.

use log::{debug, info};

use crate::cell::{Cell, Coord};
use crate::epoch::{EpochCounter, Ticket};
use crate::error::{MazeError, Result};
use crate::grid::{GridState, MAX_DIMENSION, check_dimensions};
use crate::messages::{Lang, Message};
use crate::overlay::{self, ApplyReport};
use crate::protocol::LoadRequest;
use crate::selection::{PathTicket, SelectionController};

pub type LoadTicket = Ticket<LoadRequest>;

/// Identifies one showing of the transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeToken(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct DimensionInput {
    height: String,
    width: String,
}

fn parse_dimension(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

#[derive(Debug)]
pub struct MazeSession {
    lang: Lang,
    grid: GridState,
    selection: SelectionController,
    loads: EpochCounter,
    input: DimensionInput,
    directory: Option<String>,
    directory_message: Option<Message>,
    notice: Option<NoticeToken>,
    notices_shown: u64,
}

impl MazeSession {
    pub fn new(lang: Lang, height: usize, width: usize) -> Self {
        MazeSession {
            lang,
            grid: GridState::new(),
            selection: SelectionController::new(),
            loads: EpochCounter::default(),
            input: DimensionInput {
                height: height.to_string(),
                width: width.to_string(),
            },
            directory: None,
            directory_message: None,
            notice: None,
            notices_shown: 0,
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridState {
        &mut self.grid
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn loading_enabled(&self) -> bool {
        self.directory.is_some()
    }

    pub fn set_dimension_input(&mut self, height: &str, width: &str) {
        self.input = DimensionInput {
            height: height.to_string(),
            width: width.to_string(),
        };
    }

    /// Validation text for the current dimension input, `None` when valid.
    pub fn dimension_message(&self) -> Option<&'static str> {
        let h = parse_dimension(&self.input.height);
        let w = parse_dimension(&self.input.width);
        let max = MAX_DIMENSION as i64;
        let msg = match (h, w) {
            (Some(h), Some(w)) if h > max || w > max => Message::DimensionsTooLarge,
            (Some(h), Some(w)) if check_dimensions(h, w).is_ok() => return None,
            _ => Message::InvalidInput,
        };
        Some(msg.text(self.lang))
    }

    /// Starts a grid load for the current input. Any load or path request
    /// already in flight becomes stale once this succeeds.
    pub fn begin_load(&mut self) -> Result<LoadTicket> {
        if !self.loading_enabled() {
            return Err(MazeError::LoadingDisabled);
        }
        let h = parse_dimension(&self.input.height);
        let w = parse_dimension(&self.input.width);
        let (height, width) = match (h, w) {
            (Some(h), Some(w)) => check_dimensions(h, w)?,
            _ => {
                return Err(MazeError::InvalidDimensions {
                    height: h.unwrap_or(0),
                    width: w.unwrap_or(0),
                });
            }
        };
        self.loads.advance();
        let ticket = self.loads.stamp(LoadRequest { height, width });
        debug!("load {height}x{width} issued in epoch {}", ticket.epoch);
        Ok(ticket)
    }

    /// Installs the grid for `ticket`. On failure the previous grid and
    /// selection are kept.
    pub fn finish_load(&mut self, ticket: &LoadTicket, rows: Vec<Vec<Cell>>) -> Result<()> {
        self.loads.check(ticket.epoch)?;
        let LoadRequest { height, width } = ticket.payload;
        self.grid
            .load(height, width, rows)
            .map_err(|err| match err {
                MazeError::InvalidDimensions {
                    height: got_h,
                    width: got_w,
                } => MazeError::GridShape {
                    expected_height: height,
                    expected_width: width,
                    height: got_h,
                    width: got_w,
                },
                other => other,
            })?;
        let epoch = self.selection.reset();
        info!("loaded {height}x{width} maze, selection epoch {epoch}");
        Ok(())
    }

    pub fn click(&mut self, x: usize, y: usize) -> Result<Option<PathTicket>> {
        if !self.grid.is_loaded() {
            return Err(MazeError::NotLoaded);
        }
        self.selection.click(&mut self.grid, x, y)
    }

    pub fn finish_path(&mut self, ticket: &PathTicket, path: &[Coord]) -> Result<ApplyReport> {
        overlay::apply_response(&mut self.grid, &self.selection, ticket, path)
    }

    pub fn directory_accepted(&mut self, resolved: impl Into<String>) {
        let resolved = resolved.into();
        info!("image directory set to {resolved}");
        self.directory = Some(resolved);
        self.directory_message = None;
    }

    /// Loading stays as it was; a previously accepted directory is kept.
    pub fn directory_rejected(&mut self, reason: &str) -> MazeError {
        info!("image directory rejected: {reason}");
        self.directory_message = Some(Message::DirectoryRejected);
        MazeError::ConfigurationRejected(reason.to_string())
    }

    pub fn directory_message(&self) -> Option<&'static str> {
        self.directory_message.map(|m| m.text(self.lang))
    }

    pub fn export_succeeded(&mut self) -> NoticeToken {
        self.notices_shown += 1;
        let token = NoticeToken(self.notices_shown);
        self.notice = Some(token);
        token
    }

    /// Hides the notice unless a newer export has shown it again since.
    pub fn dismiss_notice(&mut self, token: NoticeToken) {
        if self.notice == Some(token) {
            self.notice = None;
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice.map(|_| Message::ImageSaved.text(self.lang))
    }

    /// Status text for an error, `None` for errors the user never sees.
    pub fn describe(&self, err: &MazeError) -> Option<String> {
        match err {
            MazeError::StaleResponse { .. } | MazeError::OutOfBoundsCoordinate { .. } => None,
            MazeError::InvalidDimensions { height, width }
                if (*height).max(*width) > MAX_DIMENSION as i64 =>
            {
                Some(self.text(Message::DimensionsTooLarge))
            }
            MazeError::InvalidDimensions { .. } => Some(self.text(Message::InvalidInput)),
            MazeError::LoadingDisabled => Some(self.text(Message::LoadingDisabled)),
            MazeError::ConfigurationRejected(_) => Some(self.text(Message::DirectoryRejected)),
            MazeError::GridShape { .. } | MazeError::NotLoaded | MazeError::Payload(_) => {
                Some(err.to_string())
            }
        }
    }

    fn text(&self, msg: Message) -> String {
        msg.text(self.lang).to_string()
    }
}
