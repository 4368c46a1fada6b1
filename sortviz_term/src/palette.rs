//! Bar colours.
//!
//! Bars left of the boundary hint are settled and drawn green, the bar at the hint is the one
//! being sorted and drawn blue, and every other bar takes its colour from the selected
//! [`ColorScheme`], which maps the bar's value to a gradient.

use clap::ValueEnum;
use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        text.truecolor(self.r, self.g, self.b)
    }
}

pub const SORTED: Rgb = Rgb::new(0x00, 0xff, 0x00);
pub const ACTIVE: Rgb = Rgb::new(0x00, 0x00, 0xff);

/// Gradient used for bars that are not settled yet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ColorScheme {
    /// Red for small values fading to green for large ones
    #[default]
    Rainbow,
    /// Blue for small values fading to yellow for large ones
    Warm,
    /// Green for small values fading to purple for large ones
    Cool,
}

impl ColorScheme {
    pub fn color(&self, value: u32) -> Rgb {
        // keeps 2 * v within a byte
        let v = value.min(127) as u8;
        let (low, high) = (2 * v, 255 - 2 * v);

        match self {
            ColorScheme::Rainbow => Rgb::new(high, low, 128),
            ColorScheme::Warm => Rgb::new(low, low, high),
            ColorScheme::Cool => Rgb::new(low, high, low),
        }
    }
}

/// How a bar is drawn relative to the boundary hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarKind {
    Sorted,
    Active,
    Unsorted,
}

impl BarKind {
    /// Classifies the bar at `index`. Without a boundary (before the first step) every bar is
    /// unsorted.
    pub fn classify(index: usize, boundary: Option<usize>) -> Self {
        match boundary {
            Some(b) if index < b => BarKind::Sorted,
            Some(b) if index == b => BarKind::Active,
            _ => BarKind::Unsorted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BarKind::Sorted => "Sorted",
            BarKind::Active => "Being Sorted",
            BarKind::Unsorted => "Unsorted",
        }
    }

    pub fn color(&self, scheme: ColorScheme, value: u32) -> Rgb {
        match self {
            BarKind::Sorted => SORTED,
            BarKind::Active => ACTIVE,
            BarKind::Unsorted => scheme.color(value),
        }
    }
}

/// One line per bar kind with a coloured swatch. The unsorted swatch samples the scheme's
/// gradient at a low, middle and high value.
pub fn legend(scheme: ColorScheme) -> String {
    let mut legend = format!("{}\n", "Legend:".bold());

    for kind in [BarKind::Unsorted, BarKind::Sorted, BarKind::Active] {
        let swatch: String = match kind {
            BarKind::Unsorted => [1, 50, 100]
                .iter()
                .map(|&v| scheme.color(v).paint("█").to_string())
                .collect(),
            _ => kind.color(scheme, 0).paint("███").to_string(),
        };
        legend.push_str(&format!("  {swatch} {}\n", kind.label()));
    }

    legend
}
