//! Constants and command line options.

use clap::Parser;

/// Pixel size of the hue/saturation square
pub const SQUARE_SIZE: u32 = 300;

/// Radius of the cursor circle drawn over the square.
/// The stored selection is offset by this amount so the circle
/// sits around the pointer.
pub const CURSOR_RADIUS: f64 = 6.0;

pub const CURSOR_STROKE_WIDTH: f64 = 2.0;

/// Padding around the square and the bottom bar
pub const PADDING: f64 = 12.0;

/// Spacing between the widgets of the bottom bar
pub const SPACING: f64 = 12.0;

/// Starting selection as a fraction of the square (width, height)
pub const DEFAULT_SELECTION: (f64, f64) = (0.75, 0.25);

pub const WINDOW_TITLE: &str = "Choix de couleur (carré)";
pub const SHOW_HEX_LABEL: &str = "Afficher Hex";
pub const COPY_HEX_LABEL: &str = "Copier Hex";
pub const HEX_DIALOG_TITLE: &str = "Code Couleur";

#[derive(Parser, Debug, Clone)]
#[command(name = "hsb-square", version, about = "Pick a color from a hue/saturation square")]
pub struct Args {
    /// Square size in pixels
    #[arg(long, default_value_t = SQUARE_SIZE, value_parser = clap::value_parser!(u32).range(2..=2048))]
    pub size: u32,

    /// Cursor circle radius in pixels
    #[arg(long, default_value_t = CURSOR_RADIUS as u32, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub cursor_radius: u32,
}
