use std::fmt::{Display, Formatter, Result as FmtResult};

use bon::Builder;

use crate::interpolator::UnresolvedPlaceholder;

/// A resolved validation message.
///
/// Messages are the output type of the interpolator. They carry the
/// best-effort message text together with any placeholders that could not
/// be resolved while producing it. Unresolved placeholders are left
/// verbatim in `text`, so the message is always displayable; the warnings
/// let callers decide whether to log the gaps.
///
/// # Example
///
/// ```
/// use valoc::Message;
///
/// let msg = Message::builder().text("Age is required".to_string()).build();
///
/// assert_eq!(msg.to_string(), "Age is required");
/// assert!(msg.is_clean());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct Message {
    /// The resolved message text, with unresolved placeholders verbatim.
    #[builder(default)]
    pub text: String,

    /// Placeholders the resolver could not substitute.
    #[builder(default)]
    pub warnings: Vec<UnresolvedPlaceholder>,
}

impl Message {
    /// True when every placeholder in the template was resolved.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Consume the message, returning only its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.text)
    }
}

impl From<Message> for String {
    fn from(message: Message) -> Self {
        message.text
    }
}
