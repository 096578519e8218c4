//! Vertical centering from measured text height.
//!
//! Font size comes from the heuristic solver; position comes from here and is
//! exact for the metrics of the host. Horizontal padding is fixed at 8px per
//! side whatever the alignment, and no edge ever gets less than 8px.

use crate::defaults;
use crate::errors::MeasureError;
use crate::measure::{MeasureHost, Probe, measure_height};
use crate::surface::{Container, Padding, TextSurface};
use crate::types::Px;

/// Padding that centers a block `text_height` tall in a `container_height` box.
pub fn centered_padding(container_height: Px, text_height: Px) -> Padding {
    let floor = defaults::MIN_VERTICAL_PADDING;
    let top = ((container_height - text_height) / 2.0).max(floor);
    let bottom = (container_height - text_height - top).max(floor);
    Padding {
        top,
        right: defaults::HORIZONTAL_PADDING,
        bottom,
        left: defaults::HORIZONTAL_PADDING,
    }
}

/// Measure `surface` as laid out inside `container` and re-pad it.
///
/// Must run after the surface's text and font size are committed. On error
/// the surface keeps its previous padding.
pub fn center_text<H: MeasureHost + ?Sized>(
    host: &mut H,
    surface: &mut TextSurface,
    container: &Container,
) -> Result<Padding, MeasureError> {
    let probe = Probe {
        style: surface.style.clone(),
        width: container.width - Padding::FLOOR.horizontal(),
        text: surface.text.clone(),
    };
    let text_height = measure_height(host, probe)?;
    let padding = centered_padding(container.height, text_height);

    crate::log::debug!(
        container_h = container.height.0,
        text_h = text_height.0,
        top = padding.top.0,
        bottom = padding.bottom.0,
        "centered text"
    );

    surface.padding = padding;
    Ok(padding)
}
