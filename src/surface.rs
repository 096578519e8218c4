//! Per-label rendering surfaces.

use crate::defaults;
use crate::text::{FontWeight, TypographicStyle};
use crate::types::{Pt, Px, SizePx};

/// Padding applied inside a text surface
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Padding {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Padding {
    /// Minimum padding on every edge.
    pub const FLOOR: Padding = Padding {
        top: defaults::MIN_VERTICAL_PADDING,
        right: defaults::HORIZONTAL_PADDING,
        bottom: defaults::MIN_VERTICAL_PADDING,
        left: defaults::HORIZONTAL_PADDING,
    };

    pub fn horizontal(&self) -> Px {
        self.left + self.right
    }
}

/// Box a text surface sits in, in its own (unrotated) frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    pub width: Px,
    pub height: Px,
}

impl From<SizePx> for Container {
    fn from(size: SizePx) -> Self {
        Container { width: size.w, height: size.h }
    }
}

/// The committed state of one label's text node: content, typography, padding.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSurface {
    pub text: String,
    /// Font size chosen by the fit solver
    pub size: Pt,
    pub style: TypographicStyle,
    pub padding: Padding,
}

impl TextSurface {
    pub fn new(family: &str, weight: FontWeight) -> Self {
        TextSurface {
            text: String::new(),
            size: defaults::MIN_EMPTY_FONT,
            style: TypographicStyle::new(family, defaults::MIN_EMPTY_FONT, weight),
            padding: Padding::FLOOR,
        }
    }

    /// Commit new content and font size; padding is left for the centering pass.
    pub fn commit(&mut self, text: &str, size: Pt) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
        self.size = size;
        self.style.set_size(size);
    }
}

impl Default for TextSurface {
    fn default() -> Self {
        TextSurface::new(defaults::FONT_FAMILY, FontWeight::Normal)
    }
}
