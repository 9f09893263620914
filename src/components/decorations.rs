use gpui::{Bounds, Hsla, Pixels};

use crate::contracts::AccessoryView;
use crate::icon::IconSource;

pub type DetachedAccessories = Vec<Box<dyn AccessoryView>>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnderlineView {
    pub frame: Bounds<Pixels>,
    pub color: Hsla,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadingIconView {
    image: Option<IconSource>,
    frame: Bounds<Pixels>,
    hidden: bool,
}

impl LeadingIconView {
    pub(crate) fn new() -> Self {
        Self {
            hidden: true,
            ..Self::default()
        }
    }

    pub fn image(&self) -> Option<&IconSource> {
        self.image.as_ref()
    }

    pub fn frame(&self) -> Bounds<Pixels> {
        self.frame
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn place(&mut self, image: Option<&IconSource>, frame: Option<Bounds<Pixels>>) {
        match (image, frame) {
            (Some(image), Some(frame)) => {
                if self.image.as_ref() != Some(image) {
                    self.image = Some(image.clone());
                }
                self.frame = frame;
                self.hidden = false;
            }
            _ => self.hidden = true,
        }
    }
}

pub struct AccessoryContainer {
    frame: Bounds<Pixels>,
    hidden: bool,
    children: Vec<Box<dyn AccessoryView>>,
}

impl Default for AccessoryContainer {
    fn default() -> Self {
        Self {
            frame: Bounds::default(),
            hidden: true,
            children: Vec::new(),
        }
    }
}

impl AccessoryContainer {
    pub fn frame(&self) -> Bounds<Pixels> {
        self.frame
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn accessory(&self) -> Option<&dyn AccessoryView> {
        match self.children.first() {
            Some(child) => Some(child.as_ref()),
            None => None,
        }
    }

    pub fn has_accessory(&self) -> bool {
        !self.children.is_empty()
    }

    // Previously mounted views go back to the caller unparented.
    pub(crate) fn mount(&mut self, accessory: Option<Box<dyn AccessoryView>>) -> DetachedAccessories {
        let detached = std::mem::take(&mut self.children);
        if let Some(accessory) = accessory {
            self.children.push(accessory);
        }
        tracing::debug!(
            detached = detached.len(),
            mounted = self.children.len(),
            "swapped trailing accessory"
        );
        detached
    }

    pub(crate) fn place(&mut self, frame: Option<Bounds<Pixels>>) {
        let Some(frame) = frame.filter(|_| self.has_accessory()) else {
            self.hidden = true;
            return;
        };
        self.frame = frame;
        let fill = Bounds::new(gpui::point(gpui::px(0.0), gpui::px(0.0)), frame.size);
        for child in &mut self.children {
            child.set_frame(fill);
        }
        self.hidden = false;
    }
}

impl std::fmt::Debug for AccessoryContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessoryContainer")
            .field("frame", &self.frame)
            .field("hidden", &self.hidden)
            .field("children", &self.children.len())
            .finish()
    }
}
