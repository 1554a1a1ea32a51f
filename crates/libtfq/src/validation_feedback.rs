use crate::Validity;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackIcon {
    None,
    InProgress,
    Success,
    Error,
}

/// The validation indicator shown next to the query field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFeedback {
    pub icon: FeedbackIcon,
    pub tooltip: Option<String>,
}

impl ValidationFeedback {
    /// Derives the indicator from validity and the stored error message
    /// alone. Only an invalid query carries a tooltip.
    pub fn from_validity(validity: Validity, error_message: Option<&str>) -> Self {
        let icon = match validity {
            Validity::Unknown => FeedbackIcon::None,
            Validity::Validating => FeedbackIcon::InProgress,
            Validity::Valid => FeedbackIcon::Success,
            Validity::Invalid => FeedbackIcon::Error,
        };
        let tooltip = match validity {
            Validity::Invalid => error_message.map(str::to_string),
            _ => None,
        };
        Self { icon, tooltip }
    }
}
