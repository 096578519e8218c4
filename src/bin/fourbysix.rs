use std::path::PathBuf;

use clap::Parser;
use fourbysix::{BorderStyle, ConfigError, LabelSheet, Orientation, SheetOptions, TextAlignment};
use fourbysix::text::FontWeight;
use miette::IntoDiagnostic;

/// Lay out a 4x6 sheet of labels and print it as SVG.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Label rows (1-6)
    #[arg(short, long, default_value_t = 6)]
    rows: usize,

    /// Label columns (1-6)
    #[arg(short, long, default_value_t = 2)]
    cols: usize,

    /// portrait or landscape (labels rotated 90°)
    #[arg(long, default_value = "portrait")]
    orientation: Orientation,

    /// left, center or right
    #[arg(long, default_value = "center")]
    align: TextAlignment,

    /// none, thick or rounded
    #[arg(long, default_value = "thick")]
    border: BorderStyle,

    /// Font family list for label text
    #[arg(long, default_value = fourbysix::defaults::FONT_FAMILY)]
    font: String,

    /// Use a bold face
    #[arg(long)]
    bold: bool,

    /// Text applied to every label (`\n` starts a new line)
    #[arg(long)]
    bulk: Option<String>,

    /// Set one label, e.g. `label-0-1=FRAGILE` (repeatable)
    #[arg(long = "cell", value_name = "ID=TEXT")]
    cells: Vec<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Split a `label-R-C=TEXT` assignment; `\n` escapes become newlines.
fn parse_assignment(raw: &str) -> Result<(String, String), ConfigError> {
    let (id, text) = raw
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidCellAssignment { value: raw.to_string() })?;
    id.parse::<fourbysix::CellId>()?;
    Ok((id.to_string(), unescape_newlines(text)))
}

fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let options = SheetOptions {
        alignment: args.align,
        border: args.border,
        font_family: args.font.clone(),
        font_weight: if args.bold { FontWeight::Bold } else { FontWeight::Normal },
        ..SheetOptions::with_grid(args.rows, args.cols, args.orientation)
    };
    let mut sheet = LabelSheet::new(options);

    if let Some(bulk) = &args.bulk {
        sheet.set_bulk_draft(unescape_newlines(bulk));
        sheet.apply_bulk_edit();
    }
    for raw in &args.cells {
        let (id, text) = parse_assignment(raw)?;
        if sheet.update_cell(&id, text).is_none() {
            tracing::warn!(cell = %id, "cell is outside the grid, ignored");
        }
    }

    eprintln!("{}", sheet.size_info());

    let svg = sheet.print()?;
    match &args.output {
        Some(path) => std::fs::write(path, svg).into_diagnostic()?,
        None => print!("{svg}"),
    }
    Ok(())
}
