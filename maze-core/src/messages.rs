//! User-facing text in the two supported languages.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub fn from_code(code: &str) -> Lang {
        let code = code.trim();
        if code.eq_ignore_ascii_case("es") || code.to_ascii_lowercase().starts_with("es-") {
            Lang::Es
        } else {
            Lang::En
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    DimensionsTooLarge,
    InvalidInput,
    DirectoryRejected,
    ImageSaved,
    LoadingDisabled,
}

impl Message {
    pub fn text(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Message::DimensionsTooLarge, Lang::En) => {
                "Maze height and width cannot exceed 50 cells"
            }
            (Message::DimensionsTooLarge, Lang::Es) => {
                "El alto y ancho del laberinto no puede superar las 50 casillas"
            }
            (Message::InvalidInput, Lang::En) => "The input is not valid",
            (Message::InvalidInput, Lang::Es) => "La entrada no es válida",
            (Message::DirectoryRejected, Lang::En) => "Invalid directory, try again",
            (Message::DirectoryRejected, Lang::Es) => "Directorio incorrecto, inténtalo de nuevo",
            (Message::ImageSaved, Lang::En) => "The image has been saved",
            (Message::ImageSaved, Lang::Es) => "La imagen ha sido guardada",
            (Message::LoadingDisabled, Lang::En) => "Set an image directory first",
            (Message::LoadingDisabled, Lang::Es) => "Primero establece un directorio",
        }
    }
}
