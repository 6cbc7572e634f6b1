//! Trial notice: what a user sees once their trial subscription ran out.

use serde::{Deserialize, Serialize};

/// Content of the trial-expired page.
///
/// Missing fields fall back to [`TrialNotice::default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialNotice {
    /// Headline shown to the user.
    pub message: String,
    /// Address the mail action writes to.
    pub email: String,
    /// Phone number displayed next to the email.
    pub phone: String,
    /// Subject line pre-filled in the user's mail client.
    pub subject: String,
}

impl Default for TrialNotice {
    fn default() -> Self {
        Self {
            message: "Your free trial has expired. Contact us to keep managing your hotel."
                .to_string(),
            email: "sales@roomdesk.example.com".to_string(),
            phone: "+1 555 010 2030".to_string(),
            subject: "Subscription upgrade request".to_string(),
        }
    }
}

impl TrialNotice {
    /// `mailto:` URI opening a new message to [`Self::email`] with
    /// [`Self::subject`] pre-filled.
    #[must_use]
    pub fn mailto_href(&self) -> String {
        format!(
            "mailto:{}?subject={}",
            self.email,
            urlencoding::encode(&self.subject)
        )
    }

    /// `tel:` URI for [`Self::phone`] with separators stripped.
    #[must_use]
    pub fn tel_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_subject_in_mailto_href() {
        let notice = TrialNotice {
            subject: "Renew my plan & keep data".to_string(),
            ..TrialNotice::default()
        };
        assert_eq!(
            notice.mailto_href(),
            "mailto:sales@roomdesk.example.com?subject=Renew%20my%20plan%20%26%20keep%20data"
        );
    }

    #[test]
    fn should_strip_separators_from_tel_href() {
        let notice = TrialNotice {
            phone: "+1 (555) 010-2030".to_string(),
            ..TrialNotice::default()
        };
        assert_eq!(notice.tel_href(), "tel:+15550102030");
    }

    #[test]
    fn should_provide_non_empty_defaults() {
        let notice = TrialNotice::default();
        assert!(!notice.message.is_empty());
        assert!(notice.email.contains('@'));
        assert!(!notice.phone.is_empty());
        assert!(!notice.subject.is_empty());
    }
}
