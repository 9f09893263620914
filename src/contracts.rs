use std::any::Any;

use gpui::{Bounds, Hsla, Pixels};

pub trait TextInputSurface {
    fn text(&self) -> &str;

    fn placeholder(&self) -> Option<&str>;

    fn set_placeholder_color(&mut self, color: Hsla);

    fn content_bounds(&self, bounds: Bounds<Pixels>) -> Bounds<Pixels> {
        bounds
    }

    fn has_text(&self) -> bool {
        !self.text().is_empty()
    }
}

pub trait AccessoryView {
    fn frame(&self) -> Bounds<Pixels>;

    fn set_frame(&mut self, frame: Bounds<Pixels>);

    fn as_any(&self) -> &dyn Any;
}

pub trait MotionAware: Sized {
    fn disable_title_animation(self, value: bool) -> Self;
}
