//! Confirmation request types

use std::fmt;
use uuid::Uuid;

/// Identifier assigned to every confirmation request when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual style of the confirmation surface.
///
/// Only affects presentation; confirm and cancel behave the same either way.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Neutral confirmation
    #[default]
    Primary,
    /// The confirmed action deletes or discards something
    Destructive,
}

impl Variant {
    /// Lowercase label for logs and debugging
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Destructive => "destructive",
        }
    }
}

/// Commit action run against the host context when a request is confirmed.
pub type OnConfirm<C> = Box<dyn FnOnce(&mut C) -> anyhow::Result<()>>;

/// A prompt waiting for an explicit confirm/cancel decision.
///
/// `C` is the host context handed to the commit action, which lets the action
/// mutate application data once the user agrees.
pub struct ConfirmRequest<C> {
    id: RequestId,
    title: String,
    message: String,
    confirm_text: Option<String>,
    cancel_text: Option<String>,
    variant: Variant,
    on_confirm: OnConfirm<C>,
}

impl<C> ConfirmRequest<C> {
    /// Create a request with default labels and the primary variant
    #[must_use]
    pub fn new<F>(title: impl Into<String>, message: impl Into<String>, on_confirm: F) -> Self
    where
        F: FnOnce(&mut C) -> anyhow::Result<()> + 'static,
    {
        Self {
            id: RequestId::new(),
            title: title.into(),
            message: message.into(),
            confirm_text: None,
            cancel_text: None,
            variant: Variant::Primary,
            on_confirm: Box::new(on_confirm),
        }
    }

    /// Override the confirm button label
    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    /// Override the cancel button label
    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Set the visual variant
    #[must_use]
    pub const fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Shorthand for `variant(Variant::Destructive)`
    #[must_use]
    pub const fn destructive(self) -> Self {
        self.variant(Variant::Destructive)
    }

    /// Identifier of this request
    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Heading text
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Confirm label, if one was set on the request
    #[must_use]
    pub fn confirm_label(&self) -> Option<&str> {
        self.confirm_text.as_deref()
    }

    /// Cancel label, if one was set on the request
    #[must_use]
    pub fn cancel_label(&self) -> Option<&str> {
        self.cancel_text.as_deref()
    }

    /// Visual variant
    #[must_use]
    pub const fn style(&self) -> Variant {
        self.variant
    }

    /// Consume the request, keeping only what is needed to commit it
    pub(super) fn into_commit(self) -> (RequestId, String, OnConfirm<C>) {
        (self.id, self.title, self.on_confirm)
    }
}

impl<C> fmt::Debug for ConfirmRequest<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmRequest")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("confirm_text", &self.confirm_text)
            .field("cancel_text", &self.cancel_text)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// Read-only snapshot of the pending request, with default labels applied.
///
/// This is everything a render surface needs to draw the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmView<'a> {
    /// Heading text
    pub title: &'a str,
    /// Body text
    pub message: &'a str,
    /// Confirm button label
    pub confirm_text: &'a str,
    /// Cancel button label
    pub cancel_text: &'a str,
    /// Visual variant
    pub variant: Variant,
}
