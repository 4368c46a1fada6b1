//! Draws an array as a column chart, one terminal column per element.

use sortviz_orst::VALUE_RANGE;

use crate::palette::{BarKind, ColorScheme};

const BAR: &str = "█";

/// Renders arrays as bars of up to `height` rows, scaled against the largest value the engine
/// generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChart {
    height: usize,
    scheme: ColorScheme,
}

impl BarChart {
    pub fn new(height: usize, scheme: ColorScheme) -> Self {
        Self {
            height: height.max(1),
            scheme,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of filled rows for every value. Any positive value gets at least one row so that
    /// small bars do not vanish; values above the range are clipped to the full height.
    pub fn column_heights(&self, values: &[u32]) -> Vec<usize> {
        let max = *VALUE_RANGE.end() as usize;

        values
            .iter()
            .map(|&v| {
                let v = (v as usize).min(max);
                (v * self.height).div_ceil(max)
            })
            .collect()
    }

    /// The chart as `height` lines, top row first, each exactly `values.len()` columns wide.
    pub fn render(&self, values: &[u32], boundary: Option<usize>) -> String {
        let heights = self.column_heights(values);
        let mut out = String::new();

        for row in (1..=self.height).rev() {
            for (i, (&value, &h)) in values.iter().zip(&heights).enumerate() {
                if h >= row {
                    let color = BarKind::classify(i, boundary).color(self.scheme, value);
                    out.push_str(&color.paint(BAR).to_string());
                } else {
                    out.push(' ');
                }
            }
            out.push('\n');
        }

        out
    }
}
