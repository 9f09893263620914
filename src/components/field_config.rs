use std::time::Duration;

use gpui::{Hsla, Pixels, SharedString, px};

use crate::contracts::MotionAware;
use crate::error::{FieldResult, non_negative};
use crate::icon::IconSource;
use crate::motion::{MotionTransition, TitleMotion};

use super::field_colors::FieldPalette;

const SYSTEM_FONT_FAMILY: &str = ".SystemUIFont";
const LINE_HEIGHT_RATIO: f32 = 1.2;

#[derive(Clone, Debug, PartialEq)]
pub struct TitleFont {
    pub family: SharedString,
    pub size: Pixels,
    pub line_height: Pixels,
}

impl TitleFont {
    pub fn new(family: impl Into<SharedString>, size: f32, line_height: f32) -> Self {
        Self {
            family: family.into(),
            size: px(size.max(0.0)),
            line_height: px(line_height.max(0.0)),
        }
    }

    pub fn system(size: f32) -> Self {
        Self::new(SYSTEM_FONT_FAMILY, size, size * LINE_HEIGHT_RATIO)
    }

    pub(crate) fn validated(self) -> FieldResult<Self> {
        non_negative(FieldProperty::TitleFont, f32::from(self.size))?;
        non_negative(FieldProperty::TitleFont, f32::from(self.line_height))?;
        Ok(self)
    }

    fn clamped(self) -> Self {
        Self {
            size: px(clamp_non_negative(f32::from(self.size))),
            line_height: px(clamp_non_negative(f32::from(self.line_height))),
            ..self
        }
    }
}

impl Default for TitleFont {
    fn default() -> Self {
        Self::new(SYSTEM_FONT_FAMILY, 13.0, 15.5)
    }
}

pub fn default_title_color() -> Hsla {
    gpui::rgb(0x808080).into()
}

pub fn default_underline_color() -> Hsla {
    gpui::rgb(0xaaaaaa).into()
}

pub fn default_placeholder_color() -> Hsla {
    gpui::rgb(0xaaaaaa).into()
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecoratedFieldConfig {
    pub title_font: TitleFont,
    pub title_color: Hsla,
    pub underline_thickness: f32,
    pub underline_color: Hsla,
    pub error_color: Hsla,
    pub has_error: bool,
    pub error_message: Option<SharedString>,
    pub placeholder_text_color: Option<Hsla>,
    pub leading_icon_scale: f32,
    pub accessory_scale: f32,
    pub text_indent: f32,
    pub icon_padding: f32,
    pub leading_icon: Option<IconSource>,
    pub title_motion: TitleMotion,
    pub disable_title_animation: bool,
}

impl Default for DecoratedFieldConfig {
    fn default() -> Self {
        Self {
            title_font: TitleFont::default(),
            title_color: default_title_color(),
            underline_thickness: 1.0,
            underline_color: default_underline_color(),
            error_color: gpui::red(),
            has_error: false,
            error_message: None,
            placeholder_text_color: None,
            leading_icon_scale: 0.7,
            accessory_scale: 0.7,
            text_indent: 1.0,
            icon_padding: 3.0,
            leading_icon: None,
            title_motion: TitleMotion::default(),
            disable_title_animation: false,
        }
    }
}

impl DecoratedFieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_font(mut self, value: TitleFont) -> Self {
        self.title_font = value;
        self
    }

    pub fn title_color(mut self, value: impl Into<Hsla>) -> Self {
        self.title_color = value.into();
        self
    }

    pub fn underline_thickness(mut self, value: f32) -> Self {
        self.underline_thickness = clamp_non_negative(value);
        self
    }

    pub fn underline_color(mut self, value: impl Into<Hsla>) -> Self {
        self.underline_color = value.into();
        self
    }

    pub fn error_color(mut self, value: impl Into<Hsla>) -> Self {
        self.error_color = value.into();
        self
    }

    pub fn error(mut self, message: impl Into<SharedString>) -> Self {
        self.has_error = true;
        self.error_message = Some(message.into());
        self
    }

    pub fn placeholder_text_color(mut self, value: impl Into<Hsla>) -> Self {
        self.placeholder_text_color = Some(value.into());
        self
    }

    pub fn leading_icon_scale(mut self, value: f32) -> Self {
        self.leading_icon_scale = clamp_non_negative(value);
        self
    }

    pub fn accessory_scale(mut self, value: f32) -> Self {
        self.accessory_scale = clamp_non_negative(value);
        self
    }

    pub fn text_indent(mut self, value: f32) -> Self {
        self.text_indent = clamp_non_negative(value);
        self
    }

    pub fn icon_padding(mut self, value: f32) -> Self {
        self.icon_padding = clamp_non_negative(value);
        self
    }

    pub fn leading_icon(mut self, value: IconSource) -> Self {
        self.leading_icon = Some(value);
        self
    }

    pub fn fade_in(mut self, value: Duration) -> Self {
        self.title_motion.fade_in = MotionTransition::new(value);
        self
    }

    pub fn fade_out(mut self, value: Duration) -> Self {
        self.title_motion.fade_out = MotionTransition::new(value);
        self
    }

    /// Applies the builder clamps to a config built as a struct literal.
    pub(crate) fn clamped(self) -> Self {
        Self {
            title_font: self.title_font.clone().clamped(),
            underline_thickness: clamp_non_negative(self.underline_thickness),
            leading_icon_scale: clamp_non_negative(self.leading_icon_scale),
            accessory_scale: clamp_non_negative(self.accessory_scale),
            text_indent: clamp_non_negative(self.text_indent),
            icon_padding: clamp_non_negative(self.icon_padding),
            ..self
        }
    }

    pub(crate) fn palette(&self) -> FieldPalette {
        FieldPalette {
            title: self.title_color,
            underline: self.underline_color,
            error: self.error_color,
        }
    }
}

impl MotionAware for DecoratedFieldConfig {
    fn disable_title_animation(mut self, value: bool) -> Self {
        self.disable_title_animation = value;
        self
    }
}

fn clamp_non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldProperty {
    TitleFont,
    TitleColor,
    UnderlineThickness,
    UnderlineColor,
    ErrorColor,
    HasError,
    ErrorMessage,
    PlaceholderTextColor,
    LeadingIconScale,
    AccessoryScale,
    TextIndent,
    IconPadding,
    LeadingIcon,
    Accessory,
    FadeInDuration,
    FadeOutDuration,
    DisableTitleAnimation,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Recompute {
    TitleLabel,
    Colors,
    Underline,
    ErrorState,
    PlaceholderColor,
    /// Leading icon frame, current-x and the title that starts there.
    LeadingInset,
    Accessory,
    Layout,
    Nothing,
}

pub const PROPERTY_RECOMPUTE: &[(FieldProperty, Recompute)] = &[
    (FieldProperty::TitleFont, Recompute::TitleLabel),
    (FieldProperty::TitleColor, Recompute::Colors),
    (FieldProperty::UnderlineThickness, Recompute::Underline),
    (FieldProperty::UnderlineColor, Recompute::Colors),
    (FieldProperty::ErrorColor, Recompute::Colors),
    (FieldProperty::HasError, Recompute::ErrorState),
    (FieldProperty::ErrorMessage, Recompute::ErrorState),
    (FieldProperty::PlaceholderTextColor, Recompute::PlaceholderColor),
    (FieldProperty::LeadingIconScale, Recompute::LeadingInset),
    (FieldProperty::AccessoryScale, Recompute::Accessory),
    (FieldProperty::TextIndent, Recompute::LeadingInset),
    (FieldProperty::IconPadding, Recompute::LeadingInset),
    (FieldProperty::LeadingIcon, Recompute::LeadingInset),
    (FieldProperty::Accessory, Recompute::Accessory),
    (FieldProperty::FadeInDuration, Recompute::Nothing),
    (FieldProperty::FadeOutDuration, Recompute::Nothing),
    (FieldProperty::DisableTitleAnimation, Recompute::TitleLabel),
];

pub fn recompute_for(property: FieldProperty) -> Recompute {
    PROPERTY_RECOMPUTE
        .iter()
        .find(|(candidate, _)| *candidate == property)
        .map(|(_, recompute)| *recompute)
        .unwrap_or(Recompute::Layout)
}
