use gpui::{Bounds, Pixels, point, px, size};

pub const FALLBACK_TITLE_HEIGHT: f32 = 15.0;
/// Optical nudge applied to the leading icon's vertical centering.
pub const LEADING_ICON_NUDGE: f32 = -1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutInput {
    pub bounds: Bounds<Pixels>,
    pub title_line_height: Option<Pixels>,
    pub underline_thickness: f32,
    pub text_indent: f32,
    pub icon_padding: f32,
    pub leading_icon_scale: f32,
    pub accessory_scale: f32,
    pub has_leading_icon: bool,
    pub has_accessory: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldLayout {
    pub leading_icon: Option<Bounds<Pixels>>,
    pub accessory: Option<Bounds<Pixels>>,
    pub underline: Bounds<Pixels>,
    pub title: Bounds<Pixels>,
    pub text_entry: Bounds<Pixels>,
}

impl LayoutInput {
    fn width(&self) -> f32 {
        f32::from(self.bounds.size.width).max(0.0)
    }

    fn height(&self) -> f32 {
        f32::from(self.bounds.size.height).max(0.0)
    }

    pub fn title_height(&self) -> f32 {
        self.title_line_height
            .map(f32::from)
            .unwrap_or(FALLBACK_TITLE_HEIGHT)
    }

    fn leading_icon_side(&self) -> f32 {
        self.height() * self.leading_icon_scale
    }

    fn accessory_side(&self) -> f32 {
        self.height() * self.accessory_scale
    }

    pub fn leading_icon_rect(&self) -> Option<Bounds<Pixels>> {
        if !self.has_leading_icon {
            return None;
        }
        let side = self.leading_icon_side();
        let y = self.height() / 2.0 - side / 2.0 + LEADING_ICON_NUDGE;
        Some(rect(self.text_indent, y, side, side))
    }

    pub fn accessory_rect(&self) -> Option<Bounds<Pixels>> {
        if !self.has_accessory {
            return None;
        }
        let side = self.accessory_side();
        let y = self.height() / 2.0 - side / 2.0 - self.underline_thickness;
        Some(rect(self.width() - side, y, side, side))
    }

    pub fn underline_rect(&self) -> Bounds<Pixels> {
        let thickness = self.underline_thickness;
        rect(0.0, self.height() - thickness, self.width(), thickness)
    }

    pub fn current_x(&self) -> f32 {
        if self.has_leading_icon {
            self.text_indent + self.leading_icon_side() + self.icon_padding
        } else {
            self.text_indent
        }
    }

    pub fn end_offset(&self) -> f32 {
        if self.has_accessory {
            self.accessory_side()
        } else {
            0.0
        }
    }

    fn text_region_width(&self, width: f32) -> f32 {
        (width - self.current_x() - self.end_offset()).max(0.0)
    }

    pub fn title_rect(&self, floating: bool) -> Bounds<Pixels> {
        let title_height = self.title_height();
        let y = if floating { 0.0 } else { title_height };
        rect(
            self.current_x(),
            y,
            self.text_region_width(self.width()),
            title_height,
        )
    }

    pub fn text_entry_rect(&self, base: Bounds<Pixels>) -> Bounds<Pixels> {
        let title_height = self.title_height();
        let base_width = f32::from(base.size.width);
        let base_height = f32::from(base.size.height);
        rect(
            f32::from(base.origin.x) + self.current_x(),
            f32::from(base.origin.y) + title_height,
            self.text_region_width(base_width),
            (base_height - title_height - self.underline_thickness).max(0.0),
        )
    }

    pub fn compute(&self, title_floating: bool, content: Bounds<Pixels>) -> FieldLayout {
        let layout = FieldLayout {
            leading_icon: self.leading_icon_rect(),
            accessory: self.accessory_rect(),
            underline: self.underline_rect(),
            title: self.title_rect(title_floating),
            text_entry: self.text_entry_rect(content),
        };
        tracing::trace!(?layout, title_floating, "computed field layout");
        layout
    }
}

pub(crate) fn rect(x: f32, y: f32, width: f32, height: f32) -> Bounds<Pixels> {
    Bounds::new(point(px(x), px(y)), size(px(width), px(height)))
}

#[cfg(test)]
pub(crate) fn local_bounds(width: f32, height: f32) -> Bounds<Pixels> {
    rect(0.0, 0.0, width, height)
}
