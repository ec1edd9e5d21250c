//! SVG serialization of a scene.
//!
//! Output is a standalone `<svg>` element the host can embed as-is. Hidden
//! nodes are kept in the markup with `visibility="hidden"` so toggling level
//! of detail never changes tree shape.

use crate::render::color::to_hex;
use crate::render::detail::DetailPanel;
use crate::render::scene::{CellNode, Scene};
use std::fmt::Write;

const GLOW_STROKE_RATIO: f64 = 0.08;
const DETAIL_PADDING_RATIO: f64 = 0.05;
const DETAIL_TITLE_RATIO: f64 = 0.055;
const DETAIL_LINE_RATIO: f64 = 0.04;
const DETAIL_HEADING_RATIO: f64 = 0.045;

impl Scene {
    /// Renders the full visual tree as SVG markup.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        let _ = writeln!(
            svg,
            r#"<g class="grid" transform="{}">"#,
            self.transform.to_svg_attr()
        );
        for cell in &self.cells {
            write_cell(&mut svg, cell);
        }
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

fn write_cell(svg: &mut String, cell: &CellNode) {
    let size = fmt_num(cell.size);
    let _ = writeln!(
        svg,
        r#"<g class="cell{}" data-index="{}" transform="translate({},{})" opacity="{}">"#,
        if cell.highlighted { " highlighted" } else { "" },
        cell.index,
        fmt_num(cell.origin.0),
        fmt_num(cell.origin.1),
        fmt_num(cell.opacity),
    );
    if cell.highlighted {
        let _ = writeln!(
            svg,
            r#"<rect class="glow" width="{size}" height="{size}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="0.8"/>"#,
            to_hex(cell.glow),
            fmt_num(cell.size * GLOW_STROKE_RATIO),
        );
    }
    let _ = writeln!(
        svg,
        r#"<rect width="{size}" height="{size}" fill="{}" stroke="{}"/>"#,
        to_hex(cell.rect.fill),
        to_hex(cell.rect.stroke),
    );
    let center = fmt_num(cell.size / 2.0);
    let _ = writeln!(
        svg,
        r#"<text class="label" x="{center}" y="{center}" dy=".35em" text-anchor="middle" fill="{}" font-size="{}"{}>{}</text>"#,
        to_hex(cell.label.fill),
        fmt_num(cell.label.font_size),
        visibility_attr(cell.label.visible),
        escape_xml(&cell.label.text),
    );
    if let Some(panel) = &cell.detail {
        write_detail(svg, cell, panel);
    }
    svg.push_str("</g>\n");
}

fn write_detail(svg: &mut String, cell: &CellNode, panel: &DetailPanel) {
    let padding = cell.size * DETAIL_PADDING_RATIO;
    let title_size = cell.size * DETAIL_TITLE_RATIO;
    let heading_size = cell.size * DETAIL_HEADING_RATIO;
    let line_size = cell.size * DETAIL_LINE_RATIO;
    let fill = to_hex(cell.label.fill);

    let _ = writeln!(
        svg,
        r#"<g class="detail"{}>"#,
        visibility_attr(panel.visible)
    );
    let mut y = padding + title_size;
    let _ = writeln!(
        svg,
        r#"<text class="detail-title" x="{}" y="{}" fill="{fill}" font-size="{}" font-weight="bold">{}</text>"#,
        fmt_num(padding),
        fmt_num(y),
        fmt_num(title_size),
        escape_xml(&panel.title),
    );
    for section in &panel.sections {
        y += heading_size * 1.4;
        let _ = writeln!(
            svg,
            r#"<text class="detail-heading" x="{}" y="{}" fill="{fill}" font-size="{}" font-weight="bold">{}</text>"#,
            fmt_num(padding),
            fmt_num(y),
            fmt_num(heading_size),
            escape_xml(section.heading),
        );
        for line in &section.lines {
            y += line_size * 1.3;
            let _ = writeln!(
                svg,
                r#"<text class="detail-line" x="{}" y="{}" fill="{fill}" font-size="{}">{}</text>"#,
                fmt_num(padding),
                fmt_num(y),
                fmt_num(line_size),
                escape_xml(line),
            );
        }
    }
    svg.push_str("</g>\n");
}

fn visibility_attr(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        r#" visibility="hidden""#
    }
}

/// Formats coordinates with at most three decimals and no trailing zeros.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{rounded:.3}");
        text.trim_end_matches('0').to_string()
    }
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
