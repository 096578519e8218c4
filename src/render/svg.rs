//! SVG generation for a label sheet

use std::fmt::Write as _;

use super::{PlacedLabel, anchor_for, place_labels};
use crate::config::BorderStyle;
use crate::defaults;
use crate::errors::RenderError;
use crate::measure::MeasureHost;
use crate::sheet::LabelSheet;

const INK: &str = "rgb(0,0,0)";

/// Escape text for use in SVG character data and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Format a number with 6 significant figures (at most 6 decimals), trailing
/// zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).clamp(0, 6) as usize;
    let s = format!("{:.prec$}", value, prec = decimals);
    let s = if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s.as_str() };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Render the whole sheet as one SVG page at the sheet's physical size.
pub fn render_svg<H: MeasureHost>(sheet: &LabelSheet<H>) -> Result<String, RenderError> {
    let placed = place_labels(sheet)?;
    let options = sheet.options();
    let scaler = sheet.scaler();
    let page_w = scaler.len(options.page.width);
    let page_h = scaler.len(options.page.height);

    crate::log::debug!(labels = placed.len(), page_w = page_w.0, page_h = page_h.0, "rendering sheet");

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}in" height="{}in" viewBox="0 0 {} {}">"#,
        fmt_num(options.page.width.0),
        fmt_num(options.page.height.0),
        fmt_num(page_w.0),
        fmt_num(page_h.0),
    ).unwrap();
    for label in &placed {
        write_label(&mut out, label, sheet);
    }
    out.push_str("</svg>\n");
    Ok(out)
}

fn write_label<H: MeasureHost>(out: &mut String, label: &PlacedLabel<'_>, sheet: &LabelSheet<H>) {
    let options = sheet.options();
    let w = label.size.w.0;
    let h = label.size.h.0;

    let mut transform = format!("translate({},{})", fmt_num(label.center.x), fmt_num(label.center.y));
    if label.rotation != 0.0 {
        write!(transform, " rotate({})", fmt_num(label.rotation)).unwrap();
    }
    writeln!(out, r#"<g id="{}" transform="{}">"#, label.view.id, transform).unwrap();

    // Stroke sits inside the label box.
    let stroke = defaults::BORDER_WIDTH.0;
    let inset = stroke / 2.0;
    let corner = match options.border {
        BorderStyle::None => None,
        BorderStyle::Thick => Some(0.0),
        BorderStyle::Rounded => Some(defaults::BORDER_RADIUS.0),
    };
    if let Some(radius) = corner {
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            fmt_num(-w / 2.0 + inset),
            fmt_num(-h / 2.0 + inset),
            fmt_num(w - stroke),
            fmt_num(h - stroke),
        ).unwrap();
        if radius > 0.0 {
            write!(out, r#" rx="{0}" ry="{0}""#, fmt_num(radius)).unwrap();
        }
        writeln!(
            out,
            r#" fill="none" stroke="{INK}" stroke-width="{}"/>"#,
            fmt_num(stroke)
        ).unwrap();
    }

    // Rounded labels clip their text to the inside of the border.
    let clip_id = (options.border == BorderStyle::Rounded).then(|| format!("clip-{}", label.view.id));
    if let Some(clip_id) = &clip_id {
        writeln!(
            out,
            r#"<clipPath id="{clip_id}"><rect x="{}" y="{}" width="{}" height="{}" rx="{4}" ry="{4}"/></clipPath>"#,
            fmt_num(-w / 2.0 + stroke),
            fmt_num(-h / 2.0 + stroke),
            fmt_num(w - 2.0 * stroke),
            fmt_num(h - 2.0 * stroke),
            fmt_num(defaults::BORDER_RADIUS.0 - stroke),
        ).unwrap();
    }

    if !label.lines.is_empty() {
        let style = &label.view.surface.style;
        let (_, anchor) = anchor_for(options.alignment, label.size, &label.view);
        write!(
            out,
            r#"<text font-family="{}" font-size="{}""#,
            escape_xml(&style.family),
            fmt_num(style.size.0),
        ).unwrap();
        if style.weight == crate::text::FontWeight::Bold {
            out.push_str(r#" font-weight="bold""#);
        }
        if let Some(clip_id) = &clip_id {
            write!(out, r#" clip-path="url(#{clip_id})""#).unwrap();
        }
        writeln!(
            out,
            r#" text-anchor="{anchor}" dominant-baseline="central" fill="{INK}" xml:space="preserve">"#
        ).unwrap();
        for (line, pos) in &label.lines {
            if line.is_empty() {
                continue;
            }
            writeln!(
                out,
                r#"<tspan x="{}" y="{}">{}</tspan>"#,
                fmt_num(pos.x),
                fmt_num(pos.y),
                escape_xml(line)
            ).unwrap();
        }
        out.push_str("</text>\n");
    }

    out.push_str("</g>\n");
}
