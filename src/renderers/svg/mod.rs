//! SVG rendering output
//!
//! Keyboard and piano-roll diagrams are drawn as plain rectangles in a
//! unit grid and scaled to pixels when written.

pub mod keyboard;
pub mod piano_roll;

pub use keyboard::{keyboard_svg, render_keyboard, KeyboardLayout};
pub use piano_roll::{piano_roll_svg, render_piano_roll, PianoRollLayout};

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OutputError;
use crate::models::colour::Colour;

/// Minimal SVG document built from filled rectangles
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Filled rectangle with an optional stroke
    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Colour,
        stroke: Option<Colour>,
    ) {
        let stroke = stroke.map(|c| c.to_hex()).unwrap_or_else(|| "none".to_string());
        // Writing into a String cannot fail
        let _ = writeln!(
            self.body,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" stroke="{}"/>"#,
            x, y, width, height, fill.to_hex(), stroke
        );
    }

    pub fn finish(self) -> String {
        format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" ",
                "viewBox=\"0 0 {w:.0} {h:.0}\">\n{body}</svg>\n",
            ),
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// Write `content` to `dir/file_name`, creating `dir` if needed
pub fn write_svg(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(dir).map_err(|e| OutputError::io(dir, e))?;
    let path = dir.join(file_name);
    fs::write(&path, content).map_err(|e| OutputError::io(&path, e))?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}
