use druid::kurbo::Circle;
use druid::piet::{ImageFormat, InterpolationMode, PietImage};
use druid::{
    BoxConstraints, Color, Env, Event, EventCtx, Insets, LayoutCtx, LifeCycle, LifeCycleCtx,
    PaintCtx, Point, RenderContext, Size, UpdateCtx, Widget,
};
use image::{ImageBuffer, Rgba};
use std::sync::Arc;

use crate::AppState;
use crate::config::CURSOR_STROKE_WIDTH;

/// 渐变方块 + 圆形光标
pub struct ColorSquare {
    gradient: Arc<ImageBuffer<Rgba<u8>, Vec<u8>>>,
    cached_image: Option<PietImage>,
}

impl ColorSquare {
    pub fn new(gradient: Arc<ImageBuffer<Rgba<u8>, Vec<u8>>>) -> Self {
        ColorSquare { gradient, cached_image: None }
    }
}

impl Widget<AppState> for ColorSquare {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::MouseDown(e) if e.button.is_left() => {
                ctx.set_active(true);
                data.select(e.pos);
            }

            Event::MouseMove(e) if ctx.is_active() && e.buttons.has_left() => {
                data.select(e.pos);
            }

            Event::MouseUp(e) if e.button.is_left() => {
                ctx.set_active(false);
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        _event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old: &AppState, data: &AppState, _env: &Env) {
        if old.selection != data.selection {
            ctx.request_paint();
        }
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, _bc: &BoxConstraints, data: &AppState, _env: &Env) -> Size {
        // 光标可能画到方块外面
        let overflow = data.cursor_radius * 2.0 + CURSOR_STROKE_WIDTH;
        ctx.set_paint_insets(Insets::uniform(overflow));
        Size::new(data.size as f64, data.size as f64)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        let rect = Size::new(data.size as f64, data.size as f64).to_rect();

        if self.cached_image.is_none() {
            let (w, h) = self.gradient.dimensions();
            self.cached_image = ctx
                .make_image(w as usize, h as usize, self.gradient.as_raw(), ImageFormat::RgbaSeparate)
                .ok();
        }
        if let Some(img) = &self.cached_image {
            ctx.draw_image(img, rect, InterpolationMode::NearestNeighbor);
        }

        // 选区坐标是光标外接框的左上角
        let anchor = data.selection.current();
        let r = data.cursor_radius;
        let center = Point::new(anchor.x + r, anchor.y + r);
        ctx.stroke(Circle::new(center, r), &Color::WHITE, CURSOR_STROKE_WIDTH);
    }
}
