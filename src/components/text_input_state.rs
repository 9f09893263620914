use gpui::{Hsla, SharedString};

use crate::contracts::TextInputSurface;

#[derive(Clone, Debug, Default)]
pub struct InputState {
    value: String,
    caret: usize,
    selection: Option<(usize, usize)>,
    placeholder: Option<SharedString>,
    placeholder_color: Option<Hsla>,
}

impl InputState {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = value.chars().count();
        Self {
            value,
            caret,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn set_placeholder(&mut self, placeholder: Option<SharedString>) {
        self.placeholder = placeholder;
    }

    pub fn placeholder_color(&self) -> Option<Hsla> {
        self.placeholder_color
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.caret = self.len();
        self.selection = None;
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.len());
        self.selection = None;
    }

    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.len();
        let (start, end) = (start.min(len), end.min(len));
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.caret = end;
        self.selection = (start < end).then_some((start, end));
    }

    pub fn select_all(&mut self) {
        self.select(0, self.len());
    }

    pub fn move_left(&mut self) {
        match self.selection {
            Some((start, _)) => self.set_caret(start),
            None => self.set_caret(self.caret.saturating_sub(1)),
        }
    }

    pub fn move_right(&mut self) {
        match self.selection {
            Some((_, end)) => self.set_caret(end),
            None => self.set_caret(self.caret + 1),
        }
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let (start, end) = self.selection.unwrap_or((self.caret, self.caret));
        self.replace_char_range(start, end, text);
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if let Some((start, end)) = self.selection {
            self.replace_char_range(start, end, "");
            return true;
        }
        if self.caret == 0 {
            return false;
        }
        self.replace_char_range(self.caret - 1, self.caret, "");
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if let Some((start, end)) = self.selection {
            self.replace_char_range(start, end, "");
            return true;
        }
        if self.caret >= self.len() {
            return false;
        }
        self.replace_char_range(self.caret, self.caret + 1, "");
        true
    }

    pub fn replace_char_range(&mut self, start: usize, end: usize, insert: &str) {
        let len = self.len();
        let start = start.min(len);
        let end = end.min(len).max(start);
        let byte_start = byte_index_at_char(&self.value, start);
        let byte_end = byte_index_at_char(&self.value, end);
        self.value.replace_range(byte_start..byte_end, insert);
        self.caret = (start + insert.chars().count()).min(self.len());
        self.selection = None;
    }
}

impl TextInputSurface for InputState {
    fn text(&self) -> &str {
        &self.value
    }

    fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    fn set_placeholder_color(&mut self, color: Hsla) {
        self.placeholder_color = Some(color);
    }
}

fn byte_index_at_char(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(value.len())
}
