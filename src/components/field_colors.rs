use gpui::{Hsla, SharedString};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldPalette {
    pub title: Hsla,
    pub underline: Hsla,
    pub error: Hsla,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedColors {
    pub title: Hsla,
    pub underline: Hsla,
}

pub struct FieldColorRuntime;

impl FieldColorRuntime {
    pub fn shows_error(has_error: bool, error_message: Option<&str>) -> bool {
        has_error && error_message.is_some_and(|message| !message.is_empty())
    }

    pub fn colors(palette: FieldPalette, showing_error: bool) -> ResolvedColors {
        if showing_error {
            ResolvedColors {
                title: palette.error,
                underline: palette.error,
            }
        } else {
            ResolvedColors {
                title: palette.title,
                underline: palette.underline,
            }
        }
    }

    pub fn title_text(
        showing_error: bool,
        error_message: Option<&SharedString>,
        placeholder: Option<&str>,
    ) -> SharedString {
        match error_message {
            Some(message) if showing_error => message.clone(),
            _ => placeholder
                .map(|text| SharedString::from(text.to_string()))
                .unwrap_or_else(|| SharedString::from("")),
        }
    }
}
