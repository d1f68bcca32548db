use plotters::style::RGBColor;

/// Process-wide chart styling, applied by every renderer.
///
/// One theme instance is built before any chart is drawn and shared across
/// the run; there is nothing to tear down afterwards. The default canvas
/// is 1200x800; [`ChartTheme::large`] doubles the density for the
/// print-quality scatter variant.
#[derive(Debug, Clone, Copy)]
pub struct ChartTheme {
    /// Canvas size in pixels.
    pub size: (u32, u32),
    /// Caption font size.
    pub caption_size: u32,
    /// Axis label font size.
    pub label_size: u32,
}

/// Fixed categorical palette cycled across stores and categories.
const PALETTE: [RGBColor; 8] = [
    RGBColor(246, 112, 136),
    RGBColor(205, 140, 48),
    RGBColor(150, 158, 55),
    RGBColor(51, 176, 122),
    RGBColor(53, 172, 164),
    RGBColor(56, 167, 208),
    RGBColor(149, 132, 244),
    RGBColor(232, 98, 211),
];

impl ChartTheme {
    /// Double-density canvas for print-quality output.
    pub fn large(self) -> Self {
        Self {
            size: (self.size.0 * 2, self.size.1 * 2),
            caption_size: self.caption_size * 2,
            label_size: self.label_size * 2,
        }
    }

    /// Palette color for the series at `index`, cycling past the end.
    pub fn color(&self, index: usize) -> RGBColor {
        PALETTE[index % PALETTE.len()]
    }

    pub fn palette_len(&self) -> usize {
        PALETTE.len()
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            size: (1200, 800),
            caption_size: 40,
            label_size: 25,
        }
    }
}
