//! SVG export of braid diagrams.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info, warn};

use crate::braid::Braid;
use crate::error::BraidError;
use crate::geometry::{strand_paths, Point, CURVE_SAMPLES};
use crate::layout::{DrawStyle, Layout};

/// Cycle used for multicolored strands, indexed by label.
pub const RAINBOW: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Single-letter fixed colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
}

impl ColorCode {
    pub fn from_letter(c: char) -> Option<Self> {
        Some(match c {
            'b' => ColorCode::Blue,
            'g' => ColorCode::Green,
            'r' => ColorCode::Red,
            'c' => ColorCode::Cyan,
            'm' => ColorCode::Magenta,
            'y' => ColorCode::Yellow,
            'k' => ColorCode::Black,
            'w' => ColorCode::White,
            _ => return None,
        })
    }

    pub fn hex(self) -> &'static str {
        match self {
            ColorCode::Blue => "#0000ff",
            ColorCode::Green => "#008000",
            ColorCode::Red => "#ff0000",
            ColorCode::Cyan => "#00bfbf",
            ColorCode::Magenta => "#bf00bf",
            ColorCode::Yellow => "#bfbf00",
            ColorCode::Black => "#000000",
            ColorCode::White => "#ffffff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrandColor {
    /// A different color per strand label.
    #[default]
    Rainbow,
    /// The same color for every strand.
    Fixed(ColorCode),
}

impl StrandColor {
    pub fn for_label(self, label: usize) -> &'static str {
        match self {
            StrandColor::Rainbow => RAINBOW[(label - 1) % RAINBOW.len()],
            StrandColor::Fixed(code) => code.hex(),
        }
    }
}

impl FromStr for StrandColor {
    type Err = BraidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "rainbow" {
            return Ok(StrandColor::Rainbow);
        }
        let mut chars = s.chars();
        match (chars.next().and_then(ColorCode::from_letter), chars.next()) {
            (Some(code), None) => Ok(StrandColor::Fixed(code)),
            _ => Err(BraidError::InvalidConfig(format!(
                "unknown color {:?} (expected \"rainbow\" or one of b g r c m y k w)",
                s
            ))),
        }
    }
}

/// Drawing options.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    pub style: DrawStyle,
    /// Stroke width of the strands.
    pub line_width: u32,
    /// Curve samples removed on each side of an under-crossing.
    pub gap_size: usize,
    pub color: StrandColor,
    /// Canvas size in pixels.
    pub width_px: u32,
    pub height_px: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            style: DrawStyle::Compact,
            line_width: 3,
            gap_size: 3,
            color: StrandColor::Rainbow,
            width_px: 400,
            height_px: 800,
        }
    }
}

impl DrawConfig {
    pub fn validate(&self) -> Result<(), BraidError> {
        if self.gap_size >= CURVE_SAMPLES {
            return Err(BraidError::InvalidConfig(format!(
                "gap size {} must be below {}",
                self.gap_size, CURVE_SAMPLES
            )));
        }
        if self.line_width == 0 {
            return Err(BraidError::InvalidConfig("line width must be positive".into()));
        }
        if self.width_px == 0 || self.height_px == 0 {
            return Err(BraidError::InvalidConfig(format!(
                "canvas size {}x{} must be positive",
                self.width_px, self.height_px
            )));
        }
        Ok(())
    }
}

const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 30.0;

/// Maps diagram coordinates onto the canvas.
struct Canvas {
    x_scale: f64,
    y_scale: f64,
}

impl Canvas {
    fn new(strands: usize, depth: f64, config: &DrawConfig) -> Self {
        let plot_height = (config.height_px as f64 - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        Self {
            x_scale: config.width_px as f64 / strands as f64,
            y_scale: plot_height / depth,
        }
    }

    fn x(&self, x: f64) -> f64 {
        (x - 0.5) * self.x_scale
    }

    fn y(&self, y: f64) -> f64 {
        MARGIN_TOP - y * self.y_scale
    }

    fn point(&self, p: &Point) -> String {
        format!("{:.2},{:.2}", self.x(p.x), self.y(p.y))
    }
}

fn word_title(braid: &Braid) -> String {
    let items: Vec<String> = braid.signed_word().iter().map(|g| g.to_string()).collect();
    format!("Braid:   [{}]", items.join(", "))
}

/// Render `braid` as a standalone SVG document.
pub fn render_svg(braid: &Braid, config: &DrawConfig) -> Result<String, BraidError> {
    config.validate()?;
    if braid.is_empty() {
        warn!("drawing a braid with an empty word: strands will be straight");
    }

    let layout = Layout::new(braid.word(), config.style);
    let depth = layout.drawn_depth();
    let paths = strand_paths(braid, &layout, config.gap_size)?;
    let canvas = Canvas::new(braid.strand_count(), depth, config);
    debug!(
        "rendering {} strands over {} rows ({:?})",
        paths.len(),
        layout.row_count(),
        config.style
    );

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = config.width_px,
        h = config.height_px
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"20\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"14\">{}</text>\n",
        config.width_px as f64 / 2.0,
        word_title(braid)
    ));

    for path in &paths {
        let color = config.color.for_label(path.label);
        svg.push_str(&format!("  <g class=\"strand\" data-label=\"{}\">\n", path.label));
        for segment in path.segments.iter().filter(|s| s.len() > 1) {
            let pts: Vec<String> = segment.iter().map(|p| canvas.point(p)).collect();
            svg.push_str(&format!(
                "    <polyline fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" points=\"{}\"/>\n",
                color,
                config.line_width,
                pts.join(" ")
            ));
        }
        svg.push_str("  </g>\n");
    }

    let label_rows = [
        (braid.top_labels(), canvas.y(0.0) - 8.0),
        (braid.bottom_labels(), canvas.y(-depth) + 18.0),
    ];
    for (labels, y) in label_rows {
        for (p, label) in labels.iter().enumerate() {
            svg.push_str(&format!(
                "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"12\">{}</text>\n",
                canvas.x((p + 1) as f64),
                y,
                label
            ));
        }
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render `braid` and write the SVG to `path`.
pub fn save_svg(braid: &Braid, config: &DrawConfig, path: impl AsRef<Path>) -> Result<(), BraidError> {
    let path = path.as_ref();
    let svg = render_svg(braid, config)?;
    fs::write(path, svg).map_err(|source| BraidError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote braid diagram to {}", path.display());
    Ok(())
}
