pub mod components;
pub mod contracts;
pub mod error;
pub mod icon;
pub mod id;
pub mod motion;
pub mod prelude;

pub use components::{DecoratedField, DecoratedFieldConfig, FieldEvent};
pub use error::{FieldError, FieldResult};
