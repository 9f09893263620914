pub use crate::components::{
    DecoratedField, DecoratedFieldConfig, FieldEvent, FieldProperty, InputState, TitleFont,
    TitleVisibility,
};
pub use crate::contracts::{AccessoryView, MotionAware, TextInputSurface};
pub use crate::error::{FieldError, FieldResult};
pub use crate::icon::IconSource;
pub use crate::motion::{Easing, TitleMotion};
