//! Font setup so the block labels render their CJK glyphs

use crate::config::EditorConfig;
use egui::{FontData, FontDefinitions, FontFamily};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FONT_NAME: &str = "cjk";

/// Well-known system CJK font locations, tried in order
const SYSTEM_CJK_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

/// Candidate font files: the configured one first, then the system list
pub fn font_candidates(config: &EditorConfig) -> Vec<PathBuf> {
    config
        .font_path
        .iter()
        .cloned()
        .chain(SYSTEM_CJK_FONTS.iter().map(PathBuf::from))
        .collect()
}

/// Installs the first readable candidate as a fallback font for both families
pub fn install_cjk_font(ctx: &egui::Context, config: &EditorConfig) {
    let Some((path, bytes)) = font_candidates(config).into_iter().find_map(|path| read_font(&path)) else {
        warn!("No CJK font found; block labels may not render");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
    info!("Using font {}", path.display());
}

fn read_font(path: &Path) -> Option<(PathBuf, Vec<u8>)> {
    std::fs::read(path).ok().map(|bytes| (path.to_path_buf(), bytes))
}
