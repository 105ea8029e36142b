//! The full-size image overlay.
//!
//! Two states. Opening replaces whatever was shown; closing drops the image
//! reference so the full-size download is not kept alive.

use crate::surface::LightboxTrigger;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { url: String, caption: String },
}

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the image.
    Backdrop,
    /// The image or its caption.
    Content,
    CloseButton,
}

#[derive(Debug, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// The image currently held, if any.
    pub fn image_src(&self) -> Option<&str> {
        match &self.state {
            LightboxState::Open { url, .. } => Some(url),
            LightboxState::Closed => None,
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match &self.state {
            LightboxState::Open { caption, .. } => Some(caption),
            LightboxState::Closed => None,
        }
    }

    pub fn open(&mut self, url: impl Into<String>, caption: impl Into<String>) {
        self.state = LightboxState::Open {
            url: url.into(),
            caption: caption.into(),
        };
    }

    pub fn open_trigger(&mut self, trigger: &LightboxTrigger) {
        self.open(trigger.url.clone(), trigger.caption.clone());
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// Clicks on the backdrop or the close button dismiss the overlay.
    pub fn click(&mut self, target: ClickTarget) {
        if !self.is_open() {
            return;
        }
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseButton => self.close(),
            ClickTarget::Content => {}
        }
    }
}
