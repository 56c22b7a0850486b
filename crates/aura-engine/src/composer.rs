//! Composer state: the draft being typed and the files attached to it.

use crate::attachment::Attachment;

/// Draft text plus attachments pending send.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    text: String,
    attachments: Vec<Attachment>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft text, untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Replace the draft verbatim.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    /// Append newly picked files. Duplicate names are kept.
    pub fn add_attachments(&mut self, files: impl IntoIterator<Item = Attachment>) {
        self.attachments.extend(files);
    }

    /// Remove the attachment at `index`, keeping the others in order.
    ///
    /// Returns `None` and leaves the list untouched when `index` is out of range.
    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.attachments.clear();
    }

    /// Whether a send would be accepted.
    pub fn is_sendable(&self) -> bool {
        !self.text.trim().is_empty() || !self.attachments.is_empty()
    }

    /// Whether both the draft and the attachment list are empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.attachments.is_empty()
    }

    /// Take the trimmed draft and the attachments, leaving the composer empty.
    pub fn take(&mut self) -> (String, Vec<Attachment>) {
        let text = self.text.trim().to_string();
        let attachments = std::mem::take(&mut self.attachments);
        self.clear();
        (text, attachments)
    }
}
