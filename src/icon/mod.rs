use std::path::PathBuf;

use gpui::SharedString;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconName {
    value: SharedString,
}

impl IconName {
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IconSource {
    Named(IconName),
    File(PathBuf),
}

impl IconSource {
    pub fn named(value: impl Into<SharedString>) -> Self {
        Self::Named(IconName::new(value))
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }
}
