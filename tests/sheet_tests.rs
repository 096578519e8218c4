//! End-to-end behavior of a label sheet: geometry, fit, centering, content.

use fourbysix::fit::empty_font_size;
use fourbysix::measure::ProbeId;
use fourbysix::types::{Length, Pt, Px};
use fourbysix::{
    CellId, Container, LabelSheet, LabelStore, MeasureError, MeasureHost, Orientation, PageSpec,
    Probe, SheetOptions, TextSurface, center_text, centered_padding, choose_font_size,
    compute_cell_size,
};

/// Route library logs to the test harness; `RUST_LOG` picks the level.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn round3(v: Length) -> f64 {
    (v.0 * 1000.0).round() / 1000.0
}

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn stock_sheet_geometry() {
    let size = compute_cell_size(&PageSpec::FOUR_BY_SIX, 6, 2, Orientation::Portrait);
    assert_eq!(round3(size.w), 1.819);
    assert_eq!(round3(size.h), 0.898);
}

#[test]
fn landscape_geometry_is_portrait_transposed() {
    let landscape = compute_cell_size(&PageSpec::FOUR_BY_SIX, 6, 2, Orientation::Landscape);
    let portrait = compute_cell_size(&PageSpec::FOUR_BY_SIX, 2, 6, Orientation::Portrait);
    assert_eq!(landscape, portrait);
}

#[test]
fn size_info_lines() {
    let mut sheet = LabelSheet::default();
    insta::assert_snapshot!(sheet.size_info(), @r#"Label size: 1.82" x 0.90" (6x2)"#);

    sheet.set_orientation(Orientation::Landscape);
    insta::assert_snapshot!(sheet.size_info(), @r#"Label size: 0.56" x 2.82" (2x6)"#);
}

// =============================================================================
// Font fit
// =============================================================================

#[test]
fn empty_text_default_tracks_width() {
    for w in [0.4, 0.9, 1.5, 2.5] {
        let size = choose_font_size("", Length(w), Length(1.0), Orientation::Portrait);
        assert_eq!(size, Pt((w * 18.0_f64).clamp(12.0, 40.0)));
        assert_eq!(size, empty_font_size(Length(w)));
    }
}

#[test]
fn fit_is_bounded_for_every_supported_grid() {
    let wide = "W".repeat(200);
    let texts = ["", "A", "Label 12", "a\nb\nc\nd\ne\nf\ng", wide.as_str()];
    for rows in 1..=6 {
        for cols in 1..=6 {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                let cell = compute_cell_size(&PageSpec::FOUR_BY_SIX, rows, cols, orientation);
                for text in texts {
                    let size = choose_font_size(text, cell.w, cell.h, orientation);
                    assert!(size >= Pt(8.0) && size <= Pt(40.0), "{rows}x{cols} {text:?}: {size}");
                }
            }
        }
    }
}

// =============================================================================
// Centering
// =============================================================================

#[test]
fn centering_reference_values() {
    let p = centered_padding(Px(100.0), Px(40.0));
    assert_eq!((p.top, p.bottom), (Px(30.0), Px(30.0)));

    let p = centered_padding(Px(100.0), Px(90.0));
    assert_eq!((p.top, p.bottom), (Px(8.0), Px(8.0)));
}

/// Host whose layout engine always fails, counting live probes.
#[derive(Default)]
struct FailingHost {
    live: usize,
    attached_ever: usize,
}

impl MeasureHost for FailingHost {
    fn attach(&mut self, _probe: Probe) -> Result<ProbeId, MeasureError> {
        self.live += 1;
        self.attached_ever += 1;
        Ok(ProbeId(self.attached_ever as u64))
    }

    fn rendered_height(&self, _id: ProbeId) -> Result<Px, MeasureError> {
        Err(MeasureError::NonFiniteExtent)
    }

    fn detach(&mut self, _id: ProbeId) -> Option<Probe> {
        self.live -= 1;
        None
    }
}

#[test]
fn failing_host_never_leaks_probes() {
    init_tracing();
    let mut surface = TextSurface::default();
    surface.commit("hello", Pt(20.0));
    let before = surface.padding;

    let mut host = FailingHost::default();
    let container = Container { width: Px(150.0), height: Px(90.0) };
    assert_eq!(
        center_text(&mut host, &mut surface, &container),
        Err(MeasureError::NonFiniteExtent)
    );
    assert_eq!(host.live, 0);
    assert_eq!(surface.padding, before);
}

#[test]
fn sheet_survives_a_failing_host() {
    init_tracing();
    let mut sheet = LabelSheet::with_host(SheetOptions::default(), FailingHost::default());
    sheet.update_cell("label-2-1", "still fitted");

    assert_eq!(sheet.host().live, 0);
    assert!(sheet.host().attached_ever >= 12);
    let view = sheet.view(CellId::new(2, 1)).unwrap();
    assert_eq!(view.font_size, sheet.font_size_for("still fitted"));
    // no pass ever succeeded, so the initial padding is still in place
    assert_eq!(view.padding, fourbysix::Padding::FLOOR);
}

// =============================================================================
// Content store
// =============================================================================

#[test]
fn resize_preserves_and_fills_placeholders() {
    init_tracing();
    let mut sheet = LabelSheet::new(SheetOptions::with_grid(2, 2, Orientation::Portrait));
    sheet.update_cell("label-0-0", "X");
    sheet.apply_layout(3, 2);

    let store = sheet.store();
    assert_eq!(store.text(0, 0), Some("X"));
    assert_eq!(store.text(2, 0), Some("Label 5"));
    assert_eq!(store.text(2, 1), Some("Label 6"));
}

#[test]
fn bulk_apply_twice_equals_once() {
    let mut once = LabelStore::with_layout(4, 3);
    once.apply_bulk_text("Y");
    let mut twice = LabelStore::with_layout(4, 3);
    twice.apply_bulk_text("Y");
    twice.apply_bulk_text("Y");
    assert_eq!(once, twice);
}

#[test]
fn identities_round_trip_for_the_whole_grid() {
    let sheet = LabelSheet::new(SheetOptions::with_grid(6, 6, Orientation::Landscape));
    for view in sheet.views() {
        assert_eq!(view.id.to_string().parse::<CellId>(), Ok(view.id));
    }
    assert_eq!(sheet.views().count(), 36);
}
