/// Page defaults and element ids the front end binds to.
pub const DEFAULT_HEIGHT: usize = 30;
pub const DEFAULT_WIDTH: usize = 30;
/// How long the "image saved" notice stays up (ms).
pub const NOTICE_MS: i32 = 3000;

pub const BOARD_ID: &str = "maze";
pub const HEIGHT_INPUT_ID: &str = "alto";
pub const WIDTH_INPUT_ID: &str = "ancho";
pub const LOAD_BUTTON_ID: &str = "load";
pub const DIRECTORY_INPUT_ID: &str = "directorio";
pub const DIRECTORY_BUTTON_ID: &str = "set-directory";
pub const EXPORT_BUTTON_ID: &str = "export";
pub const DIMENSION_MESSAGE_ID: &str = "dimension-message";
pub const DIRECTORY_MESSAGE_ID: &str = "directory-message";
pub const NOTICE_ID: &str = "notice";
pub const STATUS_ID: &str = "status";
