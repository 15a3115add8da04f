#![windows_subsystem = "windows"]

use anyhow::Result;
use arboard::Clipboard;
use clap::Parser;
use druid::widget::{Button, CrossAxisAlignment, Flex, Label};
use druid::{AppLauncher, Data, Point, Widget, WidgetExt, WindowDesc, WindowSizePolicy};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::sync::Arc;

mod color_mapper;
mod config;
mod gradient;
mod selection_logic;
mod square;

use color_mapper::Rgb;
use config::{
    Args, COPY_HEX_LABEL, HEX_DIALOG_TITLE, PADDING, SHOW_HEX_LABEL, SPACING, WINDOW_TITLE,
};
use gradient::render_square;
use selection_logic::SelectionState;
use square::ColorSquare;

#[derive(Clone, Data)]
pub struct AppState {
    #[data(same_fn = "PartialEq::eq")]
    selection: SelectionState,
    size: u32,
    cursor_radius: f64,
}

impl AppState {
    fn new(size: u32, cursor_radius: f64) -> Self {
        AppState {
            selection: SelectionState::starting(size, cursor_radius),
            size,
            cursor_radius,
        }
    }

    /// 鼠标位置（方块内坐标）更新选区
    fn select(&mut self, pos: Point) {
        self.selection.update(pos.x, pos.y, self.size, self.cursor_radius);
        log::debug!("selection moved to {:?}", self.selection.current());
    }

    fn color(&self) -> Rgb {
        self.selection.color(self.size)
    }
}

// Clipboard helper
fn copy_text_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

fn show_hex_dialog(hex: &str) {
    log::info!("showing hex code {hex}");
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(HEX_DIALOG_TITLE)
        .set_description(format!("Code Hex: {hex}"))
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn build_ui(gradient: Arc<image::RgbaImage>) -> impl Widget<AppState> {
    let square = ColorSquare::new(gradient).padding(PADDING);

    let bottom_bar = Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .with_child(Label::new("RGB:"))
        .with_spacer(SPACING)
        .with_child(Label::dynamic(|data: &AppState, _| data.color().label()))
        .with_spacer(SPACING)
        .with_child(Button::new(SHOW_HEX_LABEL).on_click(|_ctx, data: &mut AppState, _| {
            show_hex_dialog(&data.color().hex());
        }))
        .with_spacer(SPACING)
        .with_child(Button::new(COPY_HEX_LABEL).on_click(|_ctx, data: &mut AppState, _| {
            let hex = data.color().hex();
            match copy_text_to_clipboard(&hex) {
                Ok(()) => log::info!("copied {hex} to clipboard"),
                Err(e) => log::warn!("clipboard copy failed: {e}"),
            }
        }))
        .padding(PADDING);

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(square)
        .with_child(bottom_bar)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let size = args.size;
    let cursor_radius = args.cursor_radius as f64;
    log::info!("starting with a {size}x{size} square, cursor radius {cursor_radius}");

    let gradient = Arc::new(render_square(size));
    let init = AppState::new(size, cursor_radius);
    let window = WindowDesc::new(build_ui(gradient))
        .title(WINDOW_TITLE)
        .window_size_policy(WindowSizePolicy::Content)
        .resizable(false);
    AppLauncher::with_window(window).launch(init)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use selection_logic::Coordinate;

    #[test]
    fn starts_at_three_quarters_width() {
        let state = AppState::new(300, 6.0);
        assert_eq!(state.selection.current(), Coordinate::new(219.0, 69.0));
    }

    #[test]
    fn select_offsets_by_radius() {
        let mut state = AppState::new(300, 6.0);
        state.select(Point::new(6.0, 305.0));
        assert_eq!(state.selection.current(), Coordinate::new(0.0, 299.0));
        assert_eq!(state.color().label(), "255, 0, 0");
        assert_eq!(state.color().hex(), "#FF0000");
    }

    #[test]
    fn select_outside_saturates() {
        let mut state = AppState::new(300, 6.0);
        state.select(Point::new(-50.0, -50.0));
        assert_eq!(state.color(), Rgb::new(255, 255, 255));
    }
}
