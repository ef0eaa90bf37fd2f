use log::LevelFilter;
use maze_core::Lang;
use web_sys::Window;

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::utils::{get_query_param, service_base};

/// Settings read from the page at start-up.
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub service_base: String,
    pub height: usize,
    pub width: usize,
    pub lang: Lang,
    pub log_level: LevelFilter,
}

impl PageConfig {
    pub fn from_window(window: &Window) -> Self {
        let search = window.location().search().unwrap_or_default();
        let param = |keys: &[&str]| keys.iter().find_map(|k| get_query_param(&search, k));
        let dimension = |keys: &[&str], default: usize| {
            param(keys)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };
        PageConfig {
            service_base: service_base(window),
            height: dimension(&["alto", "height"], DEFAULT_HEIGHT),
            width: dimension(&["ancho", "width"], DEFAULT_WIDTH),
            lang: param(&["lang"])
                .map(|l| Lang::from_code(&l))
                .unwrap_or_default(),
            log_level: param(&["log"])
                .and_then(|l| l.parse().ok())
                .unwrap_or(LevelFilter::Info),
        }
    }
}
