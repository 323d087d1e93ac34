//! HTML preview of a report, rendered through a Mustache template

use serde::Serialize;
use std::path::Path;

use super::report::{Cell, Report};
use crate::error::OutputError;

const REPORT_TEMPLATE: &str = include_str!("templates/report.html.mustache");

#[derive(Debug, Serialize)]
struct HtmlCell {
    value: String,
    is_image: bool,
}

#[derive(Debug, Serialize)]
struct HtmlHeader {
    name: String,
}

#[derive(Debug, Serialize)]
struct HtmlRow {
    cells: Vec<HtmlCell>,
}

#[derive(Debug, Serialize)]
struct HtmlContext {
    title: String,
    headers: Vec<HtmlHeader>,
    rows: Vec<HtmlRow>,
}

impl HtmlContext {
    /// Image cells are prefixed with `image_dir/` so they resolve from the page
    fn new(report: &Report, image_dir: Option<&str>) -> Self {
        let src = |name: &str| match image_dir {
            Some(dir) => format!("{}/{}", dir.trim_end_matches('/'), name),
            None => name.to_string(),
        };
        let rows = report
            .rows
            .iter()
            .map(|row| HtmlRow {
                cells: row
                    .iter()
                    .map(|cell| match cell {
                        Cell::Text(value) => HtmlCell {
                            value: value.clone(),
                            is_image: false,
                        },
                        Cell::Image(name) => HtmlCell {
                            value: src(name),
                            is_image: true,
                        },
                    })
                    .collect(),
            })
            .collect();
        HtmlContext {
            title: report.title.clone(),
            headers: report
                .headers
                .iter()
                .map(|name| HtmlHeader { name: name.clone() })
                .collect(),
            rows,
        }
    }
}

/// Render `report` as a standalone HTML page. Image cells are looked up in
/// `image_dir`, relative to the page.
pub fn render_html(report: &Report, image_dir: Option<&str>) -> Result<String, OutputError> {
    let template = mustache::compile_str(REPORT_TEMPLATE)?;
    Ok(template.render_to_string(&HtmlContext::new(report, image_dir))?)
}

pub fn write_html(
    report: &Report,
    image_dir: Option<&str>,
    path: &Path,
) -> Result<(), OutputError> {
    let html = render_html(report, image_dir)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
    }
    std::fs::write(path, html).map_err(|e| OutputError::io(path, e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows() {
        let mut report = Report::new("Intervals & more", &["Ascending", "Picture"]);
        report.push(vec![Cell::text("KuMa"), Cell::image("k.svg")]);
        let html = render_html(&report, None).unwrap();
        assert!(html.contains("<title>Intervals &amp; more</title>"));
        assert!(html.contains("<th>Ascending</th><th>Picture</th>"));
        assert!(html.contains("<td>KuMa</td><td><img src=\"k.svg\"></td>"));
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let html = render_html(&Report::intervals(), Some("chords")).unwrap();
        assert_eq!(html.matches("<tr>").count(), 1);
    }

    #[test]
    fn test_images_resolve_from_image_dir() {
        let mut report = Report::new("Modes", &["ModeAndDirection", "KeyboardPicture"]);
        report.push(vec![Cell::text("K Ionian up"), Cell::image("scales-Ionian-up-K.svg")]);
        let html = render_html(&report, Some("scales/")).unwrap();
        assert!(html.contains(r#"<td><img src="scales/scales-Ionian-up-K.svg"></td>"#));
        assert!(html.contains("<td>K Ionian up</td>"));
    }
}
