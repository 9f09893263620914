use std::time::Duration;

use gpui::{Bounds, Hsla, Pixels, SharedString};

use crate::contracts::{AccessoryView, TextInputSurface};
use crate::error::{FieldResult, non_negative};
use crate::icon::IconSource;
use crate::id::FieldId;
use crate::motion::MotionTransition;

use super::decorations::{AccessoryContainer, DetachedAccessories, LeadingIconView, UnderlineView};
use super::field_colors::FieldColorRuntime;
use super::field_config::{
    DecoratedFieldConfig, FieldProperty, Recompute, TitleFont, default_placeholder_color,
    recompute_for,
};
use super::field_layout::{FieldLayout, LayoutInput};
use super::text_input_state::InputState;
use super::title_state::{TitleLabel, TitleTransitionEnd, TitleVisibility, TransitionMode};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldEvent {
    EditingBegan,
    TextChanged(SharedString),
    EditingEnded(SharedString),
    TitleTransitionFinished { visible: bool, finished: bool },
}

impl From<TitleTransitionEnd> for FieldEvent {
    fn from(end: TitleTransitionEnd) -> Self {
        FieldEvent::TitleTransitionFinished {
            visible: end.visible,
            finished: end.finished,
        }
    }
}

pub struct DecoratedField<S: TextInputSurface = InputState> {
    id: FieldId,
    surface: S,
    config: DecoratedFieldConfig,
    bounds: Bounds<Pixels>,
    title: Option<TitleLabel>,
    title_generation: u64,
    underline: UnderlineView,
    leading_icon: LeadingIconView,
    accessory: AccessoryContainer,
    focused: bool,
    needs_layout: bool,
    events: Vec<FieldEvent>,
}

impl<S: TextInputSurface> DecoratedField<S> {
    #[track_caller]
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, DecoratedFieldConfig::default())
    }

    #[track_caller]
    pub fn with_config(surface: S, config: DecoratedFieldConfig) -> Self {
        let config = config.clamped();
        let mut field = Self {
            id: FieldId::from_call_site(),
            surface,
            underline: UnderlineView {
                frame: Bounds::default(),
                color: config.underline_color,
            },
            config,
            bounds: Bounds::default(),
            title: None,
            title_generation: 0,
            leading_icon: LeadingIconView::new(),
            accessory: AccessoryContainer::default(),
            focused: false,
            needs_layout: true,
            events: Vec::new(),
        };
        field.create_title_label();
        if let Some(color) = field.config.placeholder_text_color {
            field.surface.set_placeholder_color(color);
        }
        field.run(Recompute::Layout);
        field.run(Recompute::ErrorState);
        field.events.clear();
        field
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = FieldId::new(id);
        self
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &DecoratedFieldConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds<Pixels> {
        self.bounds
    }

    pub fn title(&self) -> Option<&TitleLabel> {
        self.title.as_ref()
    }

    pub fn underline(&self) -> &UnderlineView {
        &self.underline
    }

    pub fn leading_icon(&self) -> &LeadingIconView {
        &self.leading_icon
    }

    pub fn accessory_container(&self) -> &AccessoryContainer {
        &self.accessory
    }

    pub fn accessory(&self) -> Option<&dyn AccessoryView> {
        self.accessory.accessory()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn is_title_visible(&self) -> bool {
        self.surface.has_text()
    }

    pub fn title_visibility(&self) -> TitleVisibility {
        self.title
            .as_ref()
            .map(|title| title.state().visibility())
            .unwrap_or_default()
    }

    pub fn is_showing_error(&self) -> bool {
        FieldColorRuntime::shows_error(self.config.has_error, self.config.error_message.as_deref())
    }

    pub fn placeholder_text_color(&self) -> Hsla {
        self.config
            .placeholder_text_color
            .unwrap_or_else(default_placeholder_color)
    }

    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    // Geometry queries.

    fn layout_input(&self, bounds: Bounds<Pixels>) -> LayoutInput {
        LayoutInput {
            bounds,
            title_line_height: self.title.as_ref().map(TitleLabel::line_height),
            underline_thickness: self.config.underline_thickness,
            text_indent: self.config.text_indent,
            icon_padding: self.config.icon_padding,
            leading_icon_scale: self.config.leading_icon_scale,
            accessory_scale: self.config.accessory_scale,
            has_leading_icon: self.config.leading_icon.is_some(),
            has_accessory: self.accessory.has_accessory(),
        }
    }

    pub fn title_height(&self) -> f32 {
        self.layout_input(self.bounds).title_height()
    }

    pub fn title_rect_for_bounds(&self, bounds: Bounds<Pixels>, editing: bool) -> Bounds<Pixels> {
        self.layout_input(bounds).title_rect(editing)
    }

    pub fn text_rect(&self, bounds: Bounds<Pixels>) -> Bounds<Pixels> {
        self.layout_input(bounds)
            .text_entry_rect(self.surface.content_bounds(bounds))
    }

    pub fn editing_rect(&self, bounds: Bounds<Pixels>) -> Bounds<Pixels> {
        self.text_rect(bounds)
    }

    pub fn placeholder_rect(&self, bounds: Bounds<Pixels>) -> Bounds<Pixels> {
        self.text_rect(bounds)
    }

    pub fn computed_layout(&self) -> FieldLayout {
        self.layout_input(self.bounds).compute(
            self.is_title_visible(),
            self.surface.content_bounds(self.bounds),
        )
    }

    pub fn layout(&mut self, bounds: Bounds<Pixels>) -> Bounds<Pixels> {
        self.bounds = bounds;
        self.place_leading_icon();
        self.place_accessory();
        self.place_underline();
        let floating = self.title_visibility().is_visible();
        let title_rect = self.title_rect_for_bounds(bounds, floating);
        if let Some(title) = self.title.as_mut() {
            title.state_mut().reposition(title_rect);
        }
        self.needs_layout = false;
        let text = self.text_rect(bounds);
        tracing::trace!(field = %self.id, ?bounds, ?text, "layout pass");
        text
    }

    // Editing lifecycle.

    /// Title changes animate. `update` is the programmatic, immediate path.
    pub fn edit<R>(&mut self, apply: impl FnOnce(&mut S) -> R) -> R {
        self.apply_text_change(TransitionMode::Animated, apply)
    }

    pub fn update<R>(&mut self, apply: impl FnOnce(&mut S) -> R) -> R {
        self.apply_text_change(TransitionMode::Immediate, apply)
    }

    fn apply_text_change<R>(
        &mut self,
        mode: TransitionMode,
        apply: impl FnOnce(&mut S) -> R,
    ) -> R {
        let before = self.surface.text().to_string();
        let result = apply(&mut self.surface);
        if self.surface.text() != before {
            self.events
                .push(FieldEvent::TextChanged(self.surface.text().to_string().into()));
        }
        self.update_title_label(mode);
        result
    }

    pub fn begin_editing(&mut self) {
        if self.focused {
            return;
        }
        self.focused = true;
        self.events.push(FieldEvent::EditingBegan);
        self.update_title_label(TransitionMode::Animated);
    }

    pub fn end_editing(&mut self) {
        if !self.focused {
            return;
        }
        self.focused = false;
        self.events
            .push(FieldEvent::EditingEnded(self.surface.text().to_string().into()));
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(title) = self.title.as_mut() else {
            return false;
        };
        if let Some(end) = title.state_mut().advance(dt) {
            self.events.push(end.into());
        }
        title.state().is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.title
            .as_ref()
            .is_some_and(|title| title.state().is_animating())
    }

    // Property surface.

    pub fn set_title_font(&mut self, font: TitleFont) -> FieldResult<()> {
        self.config.title_font = font.validated().inspect_err(|error| {
            tracing::warn!(field = %self.id, %error, "rejected title font");
        })?;
        self.property_changed(FieldProperty::TitleFont);
        Ok(())
    }

    pub fn set_title_color(&mut self, color: impl Into<Hsla>) {
        self.config.title_color = color.into();
        self.property_changed(FieldProperty::TitleColor);
    }

    pub fn set_underline_thickness(&mut self, thickness: f32) -> FieldResult<()> {
        self.config.underline_thickness =
            self.checked(FieldProperty::UnderlineThickness, thickness)?;
        self.property_changed(FieldProperty::UnderlineThickness);
        Ok(())
    }

    pub fn set_underline_color(&mut self, color: impl Into<Hsla>) {
        self.config.underline_color = color.into();
        self.property_changed(FieldProperty::UnderlineColor);
    }

    pub fn set_error_color(&mut self, color: impl Into<Hsla>) {
        self.config.error_color = color.into();
        self.property_changed(FieldProperty::ErrorColor);
    }

    pub fn set_has_error(&mut self, has_error: bool) {
        self.config.has_error = has_error;
        self.property_changed(FieldProperty::HasError);
    }

    pub fn set_error_message(&mut self, message: Option<SharedString>) {
        self.config.error_message = message;
        self.property_changed(FieldProperty::ErrorMessage);
    }

    pub fn set_placeholder_text_color(&mut self, color: Option<Hsla>) {
        let Some(color) = color else {
            tracing::warn!(
                field = %self.id,
                "ignoring empty placeholder text color, keeping the previous one"
            );
            return;
        };
        self.config.placeholder_text_color = Some(color);
        self.property_changed(FieldProperty::PlaceholderTextColor);
    }

    pub fn set_leading_icon_scale(&mut self, scale: f32) -> FieldResult<()> {
        self.config.leading_icon_scale = self.checked(FieldProperty::LeadingIconScale, scale)?;
        self.property_changed(FieldProperty::LeadingIconScale);
        Ok(())
    }

    pub fn set_accessory_scale(&mut self, scale: f32) -> FieldResult<()> {
        self.config.accessory_scale = self.checked(FieldProperty::AccessoryScale, scale)?;
        self.property_changed(FieldProperty::AccessoryScale);
        Ok(())
    }

    pub fn set_text_indent(&mut self, indent: f32) -> FieldResult<()> {
        self.config.text_indent = self.checked(FieldProperty::TextIndent, indent)?;
        self.property_changed(FieldProperty::TextIndent);
        Ok(())
    }

    pub fn set_icon_padding(&mut self, padding: f32) -> FieldResult<()> {
        self.config.icon_padding = self.checked(FieldProperty::IconPadding, padding)?;
        self.property_changed(FieldProperty::IconPadding);
        Ok(())
    }

    pub fn set_leading_icon(&mut self, icon: Option<IconSource>) {
        self.config.leading_icon = icon;
        self.property_changed(FieldProperty::LeadingIcon);
    }

    pub fn set_accessory(
        &mut self,
        accessory: Option<Box<dyn AccessoryView>>,
    ) -> DetachedAccessories {
        let detached = self.accessory.mount(accessory);
        self.property_changed(FieldProperty::Accessory);
        detached
    }

    pub fn set_fade_in_duration(&mut self, duration: Duration) {
        self.config.title_motion.fade_in = MotionTransition::new(duration);
        self.property_changed(FieldProperty::FadeInDuration);
    }

    pub fn set_fade_out_duration(&mut self, duration: Duration) {
        self.config.title_motion.fade_out = MotionTransition::new(duration);
        self.property_changed(FieldProperty::FadeOutDuration);
    }

    pub fn set_disable_title_animation(&mut self, disabled: bool) {
        self.config.disable_title_animation = disabled;
        self.property_changed(FieldProperty::DisableTitleAnimation);
    }

    fn checked(&self, property: FieldProperty, value: f32) -> FieldResult<f32> {
        non_negative(property, value).inspect_err(|error| {
            tracing::warn!(field = %self.id, %error, "rejected property write");
        })
    }

    fn property_changed(&mut self, property: FieldProperty) {
        let recompute = recompute_for(property);
        tracing::debug!(field = %self.id, ?property, ?recompute, "property changed");
        self.run(recompute);
    }

    fn run(&mut self, recompute: Recompute) {
        match recompute {
            Recompute::TitleLabel => self.update_title_label(TransitionMode::Immediate),
            Recompute::Colors => self.update_colors(),
            Recompute::Underline => {
                self.place_underline();
                self.place_accessory();
                self.needs_layout = true;
            }
            Recompute::ErrorState => {
                self.update_colors();
                self.update_title_label(TransitionMode::Immediate);
            }
            Recompute::PlaceholderColor => {
                let color = self.placeholder_text_color();
                self.surface.set_placeholder_color(color);
            }
            Recompute::LeadingInset => {
                self.place_leading_icon();
                self.update_title_label(TransitionMode::Immediate);
                self.needs_layout = true;
            }
            Recompute::Accessory => {
                self.place_accessory();
                self.update_title_label(TransitionMode::Immediate);
                self.needs_layout = true;
            }
            Recompute::Layout => {
                self.place_leading_icon();
                self.place_accessory();
                self.place_underline();
                self.update_title_label(TransitionMode::Immediate);
                self.needs_layout = true;
            }
            Recompute::Nothing => {}
        }
    }

    // Targeted recomputes.

    fn create_title_label(&mut self) {
        if self.title.is_some() {
            return;
        }
        self.title_generation += 1;
        let placeholder = self.title_rect_for_bounds(self.bounds, false);
        let color = FieldColorRuntime::colors(self.config.palette(), self.is_showing_error()).title;
        self.title = Some(TitleLabel::new(
            self.title_generation,
            self.config.title_font.clone(),
            color,
            placeholder,
        ));
    }

    fn update_title_label(&mut self, mode: TransitionMode) {
        let mode = if self.config.disable_title_animation {
            if let Some(previous) = self.title.take() {
                tracing::debug!(
                    field = %self.id,
                    generation = previous.generation,
                    "recreating title label"
                );
                if let Some(in_flight) = previous.state().transition() {
                    self.events.push(FieldEvent::TitleTransitionFinished {
                        visible: in_flight.target.is_visible(),
                        finished: false,
                    });
                }
            }
            TransitionMode::Immediate
        } else {
            mode
        };
        self.create_title_label();

        let showing_error = self.is_showing_error();
        let text = FieldColorRuntime::title_text(
            showing_error,
            self.config.error_message.as_ref(),
            self.surface.placeholder(),
        );
        let target = TitleVisibility::from_content(self.surface.has_text());

        if let Some(title) = self.title.as_mut() {
            title.text = text;
            title.font = self.config.title_font.clone();
        }
        // Taken after the font is applied, since the font sets the title height.
        let title_rect = self.layout_input(self.bounds).title_rect(target.is_visible());
        let motion = self.config.title_motion;
        if let Some(title) = self.title.as_mut() {
            let ended = title.state_mut().drive(target, title_rect, mode, &motion);
            self.events.extend(ended.into_iter().map(FieldEvent::from));
        }
    }

    fn update_colors(&mut self) {
        let colors = FieldColorRuntime::colors(self.config.palette(), self.is_showing_error());
        if let Some(title) = self.title.as_mut() {
            title.color = colors.title;
        }
        self.underline.color = colors.underline;
    }

    fn place_underline(&mut self) {
        self.underline.frame = self.layout_input(self.bounds).underline_rect();
        self.update_colors();
    }

    fn place_leading_icon(&mut self) {
        let frame = self.layout_input(self.bounds).leading_icon_rect();
        self.leading_icon
            .place(self.config.leading_icon.as_ref(), frame);
    }

    fn place_accessory(&mut self) {
        let frame = self.layout_input(self.bounds).accessory_rect();
        self.accessory.place(frame);
    }
}

impl DecoratedField<InputState> {
    #[track_caller]
    pub fn with_placeholder(placeholder: impl Into<SharedString>) -> Self {
        Self::new(InputState::default().with_placeholder(placeholder))
    }

    pub fn text(&self) -> &str {
        self.surface.value()
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        self.edit(|state| state.insert_text(text))
    }

    pub fn delete_backward(&mut self) -> bool {
        self.edit(InputState::delete_backward)
    }

    pub fn clear(&mut self) {
        self.edit(|state| state.set_value(""));
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.update(|state| state.set_value(text));
    }

    pub fn set_placeholder(&mut self, placeholder: Option<SharedString>) {
        self.surface.set_placeholder(placeholder);
        self.update_title_label(TransitionMode::Immediate);
    }
}

impl<S: TextInputSurface> std::fmt::Debug for DecoratedField<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoratedField")
            .field("id", &self.id)
            .field("bounds", &self.bounds)
            .field("title", &self.title)
            .field("underline", &self.underline)
            .field("leading_icon", &self.leading_icon)
            .field("accessory", &self.accessory)
            .field("focused", &self.focused)
            .finish()
    }
}
