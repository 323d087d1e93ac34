//! Renderers for generated note sets
//!
//! SVG keyboard and piano-roll diagrams, delimited reports and their HTML
//! preview.

pub mod html;
pub mod layout;
pub mod report;
pub mod svg;

pub use html::{render_html, write_html};
pub use report::{Cell, ChordImages, ModeImages, Report, TsvReport};
pub use svg::{
    keyboard_svg, piano_roll_svg, render_keyboard, render_piano_roll, KeyboardLayout,
    PianoRollLayout,
};
