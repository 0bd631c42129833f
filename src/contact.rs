use chrono::{DateTime, Utc};
use dashmap::DashMap;
use http::StatusCode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicU64, Ordering},
        LazyLock,
    },
};
use thiserror::Error;

use crate::content::{FieldCopy, CONTACT_FIELDS};

pub const MAX_FIELD_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;
pub const INBOX_CAPACITY: u64 = 256;

pub static GLOBAL_INBOX: LazyLock<Inbox> = LazyLock::new(Inbox::default);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// The `name` attribute of the matching input.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Label and placeholder shown for the input.
    pub fn copy(&self) -> &'static FieldCopy {
        &CONTACT_FIELDS[*self as usize]
    }

    fn max_len(&self) -> usize {
        match self {
            ContactField::Message => MAX_MESSAGE_LEN,
            _ => MAX_FIELD_LEN,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactField {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "subject" => Ok(ContactField::Subject),
            "message" => Ok(ContactField::Message),
            _ => Err(ContactError::UnknownField(s.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("{0} is too long")]
    TooLong(ContactField),
    #[error("email address doesn't look right")]
    InvalidEmail,
    #[error("unknown form field '{0}'")]
    UnknownField(String),
    #[error("a message is already being sent")]
    InFlight,
    #[error("couldn't deliver message: {0}")]
    Transport(String),
}

impl ContactError {
    /// HTTP status the contact endpoint answers with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Transport(_) => StatusCode::SERVICE_UNAVAILABLE,
            ContactError::InFlight => StatusCode::CONFLICT,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Live form values, one per input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Overwrites exactly one field.
    pub fn apply(&mut self, field: ContactField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        ContactMessage::new(&self.name, &self.email, &self.subject, &self.message)
    }
}

/// A validated, trimmed message ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Result<Self, ContactError> {
        let values = [name, email, subject, message].map(str::trim);
        for (field, value) in ContactField::ALL.iter().zip(values) {
            if value.is_empty() {
                return Err(ContactError::MissingField(*field));
            }
            if value.chars().count() > field.max_len() {
                return Err(ContactError::TooLong(*field));
            }
        }
        let [name, email, subject, message] = values;
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: u64,
    pub received_at: DateTime<Utc>,
}

/// Where submitted messages go.
pub trait ContactTransport: Send + Sync {
    fn deliver(&self, message: ContactMessage) -> Result<Receipt, ContactError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub receipt: Receipt,
    pub message: ContactMessage,
}

/// Bounded in-process store used by the server. Once full, each delivery
/// evicts the oldest message.
#[derive(Debug)]
pub struct Inbox {
    capacity: u64,
    next_id: AtomicU64,
    messages: DashMap<u64, StoredMessage>,
}

impl Default for Inbox {
    fn default() -> Self {
        Self::with_capacity(INBOX_CAPACITY)
    }
}

impl Inbox {
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            capacity: capacity.max(1),
            next_id: AtomicU64::new(0),
            messages: DashMap::new(),
        }
    }

    /// Messages currently retained.
    pub fn stored(&self) -> usize {
        self.messages.len()
    }
}

impl ContactTransport for Inbox {
    fn deliver(&self, message: ContactMessage) -> Result<Receipt, ContactError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let receipt = Receipt {
            id,
            received_at: Utc::now(),
        };
        self.messages.insert(
            id,
            StoredMessage {
                receipt: receipt.clone(),
                message,
            },
        );
        // ids are sequential, so the window is always (id - capacity, id]
        if id > self.capacity {
            self.messages.remove(&(id - self.capacity));
        }
        Ok(receipt)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent(u64),
    Failed(String),
}

/// Client-side submission lifecycle. Success is only reported once the
/// transport has confirmed with a receipt id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    status: SubmitStatus,
    acknowledgements: u32,
}

impl Submission {
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Number of press-and-release pulses played so far.
    pub fn acknowledgements(&self) -> u32 {
        self.acknowledgements
    }

    pub fn begin(&mut self, form: &ContactForm) -> Result<ContactMessage, ContactError> {
        if self.is_sending() {
            return Err(ContactError::InFlight);
        }
        match form.validate() {
            Ok(message) => {
                self.acknowledgements += 1;
                self.status = SubmitStatus::Sending;
                Ok(message)
            }
            Err(e) => {
                self.status = SubmitStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn finish(&mut self, result: Result<u64, String>) {
        if !self.is_sending() {
            return;
        }
        self.status = match result {
            Ok(id) => SubmitStatus::Sent(id),
            Err(e) => SubmitStatus::Failed(e),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Internship".to_string(),
            message: "Let's talk.".to_string(),
        }
    }

    #[test]
    fn test_name_input_updates_only_name() {
        let mut form = filled();
        let before = form.clone();
        form.apply(ContactField::Name, "Grace");
        assert_eq!(form.name, "Grace");
        assert_eq!(form.email, before.email);
        assert_eq!(form.subject, before.subject);
        assert_eq!(form.message, before.message);
    }

    #[test]
    fn test_fields_parse_from_input_names() {
        for field in ContactField::ALL {
            assert_eq!(field.name().parse::<ContactField>(), Ok(field));
        }
        assert_eq!(
            "phone".parse::<ContactField>(),
            Err(ContactError::UnknownField("phone".to_string()))
        );
        assert_eq!(ContactField::Name.copy().label, "Full Name");
        assert_eq!(ContactField::Email.copy().placeholder, "your@email.com");
        assert_eq!(ContactField::Message.copy().label, "Message");
    }

    #[test]
    fn test_validation() {
        let message = filled().validate().expect("valid form");
        assert_eq!(message.name, "Ada");

        let mut form = filled();
        form.apply(ContactField::Subject, "   ");
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(ContactField::Subject))
        );

        let mut form = filled();
        form.apply(ContactField::Email, "ada.example.com");
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));

        let mut form = filled();
        form.apply(ContactField::Name, "x".repeat(MAX_FIELD_LEN + 1));
        assert_eq!(
            form.validate(),
            Err(ContactError::TooLong(ContactField::Name))
        );

        let mut form = filled();
        form.apply(ContactField::Message, "  padded  ");
        assert_eq!(form.validate().map(|m| m.message), Ok("padded".to_string()));
    }

    #[test]
    fn test_inbox_delivery() {
        let inbox = Inbox::default();
        assert_eq!(inbox.stored(), 0);
        let first = inbox
            .deliver(filled().validate().expect("valid form"))
            .expect("delivered");
        let second = inbox
            .deliver(filled().validate().expect("valid form"))
            .expect("delivered");
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(inbox.stored(), 2);
        let stored = inbox.messages.get(&first.id).expect("stored message").clone();
        assert_eq!(stored.message.email, "ada@example.com");
        assert_eq!(stored.receipt, first);
    }

    #[test]
    fn test_inbox_evicts_oldest_when_full() {
        let inbox = Inbox::with_capacity(3);
        let ids = (0..10)
            .map(|_| {
                inbox
                    .deliver(filled().validate().expect("valid form"))
                    .expect("delivered")
                    .id
            })
            .collect::<Vec<_>>();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert_eq!(inbox.stored(), 3);
        let mut kept = inbox.messages.iter().map(|m| *m.key()).collect::<Vec<_>>();
        kept.sort_unstable();
        assert_eq!(kept, vec![8, 9, 10]);
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ContactError::InvalidEmail.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ContactError::MissingField(ContactField::Message).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ContactError::Transport("down".to_string()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_submission_acknowledges_once() {
        let mut submission = Submission::default();
        let form = filled();
        submission.begin(&form).expect("first submission");
        assert_eq!(submission.acknowledgements(), 1);
        assert_eq!(submission.begin(&form), Err(ContactError::InFlight));
        assert_eq!(submission.acknowledgements(), 1);

        submission.finish(Ok(7));
        assert_eq!(submission.status(), &SubmitStatus::Sent(7));
        submission.begin(&form).expect("second submission");
        assert_eq!(submission.acknowledgements(), 2);
    }

    #[test]
    fn test_submission_reports_failure() {
        let mut submission = Submission::default();
        submission.begin(&filled()).expect("submission");
        assert_eq!(submission.status(), &SubmitStatus::Sending);
        submission.finish(Err("server unavailable".to_string()));
        assert_eq!(
            submission.status(),
            &SubmitStatus::Failed("server unavailable".to_string())
        );
        // a stray completion can't flip a failure into success
        submission.finish(Ok(1));
        assert!(matches!(submission.status(), SubmitStatus::Failed(_)));
    }

    #[test]
    fn test_invalid_submission_is_not_acknowledged() {
        let mut submission = Submission::default();
        let err = submission.begin(&ContactForm::default()).unwrap_err();
        assert_eq!(err, ContactError::MissingField(ContactField::Name));
        assert_eq!(submission.acknowledgements(), 0);
        assert_eq!(
            submission.status(),
            &SubmitStatus::Failed("name is required".to_string())
        );
    }
}
