//! Measuring rendered text through a transient probe.
//!
//! A [`Probe`] is an off-tree copy of a text surface: same typography, fixed
//! width, wrapping on. It is attached to a [`MeasureHost`] only long enough to
//! read its rendered height. [`ProbeGuard`] owns the attachment and detaches
//! on drop, so the probe is released on every exit path.

use crate::errors::MeasureError;
use crate::text::{TypographicStyle, layout_text};
use crate::types::Px;

/// Off-tree measurement surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Probe {
    pub style: TypographicStyle,
    /// Fixed layout width; text wraps inside it
    pub width: Px,
    pub text: String,
}

/// Handle to an attached probe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProbeId(pub u64);

/// A text layout environment that can measure attached probes.
pub trait MeasureHost {
    /// Attach a probe so it takes part in layout.
    fn attach(&mut self, probe: Probe) -> Result<ProbeId, MeasureError>;

    /// Rendered height of an attached probe.
    fn rendered_height(&self, id: ProbeId) -> Result<Px, MeasureError>;

    /// Remove a probe, returning it if it was attached.
    fn detach(&mut self, id: ProbeId) -> Option<Probe>;
}

/// Scoped attachment of a probe. Detaches when dropped.
#[must_use]
pub struct ProbeGuard<'a, H: MeasureHost + ?Sized> {
    host: &'a mut H,
    id: ProbeId,
}

impl<'a, H: MeasureHost + ?Sized> ProbeGuard<'a, H> {
    pub fn attach(host: &'a mut H, probe: Probe) -> Result<Self, MeasureError> {
        let id = host.attach(probe)?;
        Ok(ProbeGuard { host, id })
    }

    pub fn rendered_height(&self) -> Result<Px, MeasureError> {
        self.host.rendered_height(self.id)
    }
}

impl<H: MeasureHost + ?Sized> Drop for ProbeGuard<'_, H> {
    fn drop(&mut self) {
        if self.host.detach(self.id).is_none() {
            crate::log::warn!(probe = self.id.0, "probe was already detached");
        }
    }
}

/// Attach `probe`, read its height, and detach it again.
pub fn measure_height<H: MeasureHost + ?Sized>(host: &mut H, probe: Probe) -> Result<Px, MeasureError> {
    let guard = ProbeGuard::attach(host, probe)?;
    let height = guard.rendered_height()?;
    if !height.is_finite() {
        return Err(MeasureError::NonFiniteExtent);
    }
    Ok(height)
}

/// Headless layout host backed by [`layout_text`].
#[derive(Debug, Default)]
pub struct Document {
    probes: Vec<(ProbeId, Probe)>,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of probes currently attached
    pub fn attached_len(&self) -> usize {
        self.probes.len()
    }
}

impl MeasureHost for Document {
    fn attach(&mut self, probe: Probe) -> Result<ProbeId, MeasureError> {
        Px::try_positive(probe.width.0)
            .map_err(|_| MeasureError::InvalidProbeWidth { width: probe.width.0 })?;
        Px::try_positive(probe.style.size.0)
            .map_err(|_| MeasureError::InvalidFontSize { size: probe.style.size.0 })?;
        let id = ProbeId(self.next_id);
        self.next_id += 1;
        self.probes.push((id, probe));
        Ok(id)
    }

    fn rendered_height(&self, id: ProbeId) -> Result<Px, MeasureError> {
        let (_, probe) = self
            .probes
            .iter()
            .find(|(pid, _)| *pid == id)
            .ok_or(MeasureError::ProbeNotAttached { id: id.0 })?;
        Ok(layout_text(&probe.text, &probe.style, probe.width).height())
    }

    fn detach(&mut self, id: ProbeId) -> Option<Probe> {
        let index = self.probes.iter().position(|(pid, _)| *pid == id)?;
        Some(self.probes.remove(index).1)
    }
}
