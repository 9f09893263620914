mod decorated_field;
mod decorations;
mod field_colors;
mod field_config;
mod field_layout;
mod text_input_state;
mod title_state;

#[cfg(test)]
mod test_field_invariants;

pub use decorated_field::{DecoratedField, FieldEvent};
pub use decorations::{AccessoryContainer, DetachedAccessories, LeadingIconView, UnderlineView};
pub use field_colors::{FieldColorRuntime, FieldPalette, ResolvedColors};
pub use field_config::{
    DecoratedFieldConfig, FieldProperty, PROPERTY_RECOMPUTE, Recompute, TitleFont,
    default_placeholder_color, default_title_color, default_underline_color, recompute_for,
};
pub use field_layout::{FALLBACK_TITLE_HEIGHT, FieldLayout, LEADING_ICON_NUDGE, LayoutInput};
pub use text_input_state::InputState;
pub use title_state::{
    TitleFrame, TitleLabel, TitleStateMachine, TitleTransition, TitleTransitionEnd,
    TitleVisibility, TransitionMode,
};
