use thiserror::Error;

use super::lead::{Field, Lead, LeadFields};
use super::sink::SinkError;

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter your name, contact, and message.";
pub const SENT_MESSAGE: &str = "Sent ✅ We’ll get back to you shortly.";
pub const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    None,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmitStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl SubmitStatus {
    fn success() -> Self {
        Self {
            kind: StatusKind::Success,
            message: SENT_MESSAGE.to_string(),
        }
    }

    fn error(message: &str) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.to_string(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.kind != StatusKind::None
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
}

/// State behind the quick-inquiry form.
///
/// A submission is split in two so a component can hand the insert off to the
/// event loop: [`LeadForm::begin_submit`] validates and returns the lead to
/// send, [`LeadForm::complete`] applies the sink's answer. Fields survive a
/// failed insert so the visitor can retry without retyping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    fields: LeadFields,
    submitting: bool,
    status: SubmitStatus,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Editing any field hides the previous outcome.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.status = SubmitStatus::default();
    }

    /// Starts a submission.
    ///
    /// `Ok(Some(lead))` means the caller must send exactly that lead and then
    /// call [`LeadForm::complete`]. `Ok(None)` means validation failed and the
    /// error status is already set.
    pub fn begin_submit(&mut self) -> Result<Option<Lead>, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }

        self.submitting = true;
        self.status = SubmitStatus::default();

        match Lead::from_fields(&self.fields) {
            Ok(lead) => Ok(Some(lead)),
            Err(e) => {
                log::debug!("Inquiry not sent: {}", e);
                self.status = SubmitStatus::error(MISSING_FIELDS_MESSAGE);
                self.submitting = false;
                Ok(None)
            }
        }
    }

    pub fn complete(&mut self, result: Result<(), SinkError>) {
        match result {
            Ok(()) => {
                self.status = SubmitStatus::success();
                self.fields.clear();
            }
            Err(e) => {
                log::error!("Failed to submit lead: {}", e);
                self.status = SubmitStatus::error(RETRY_MESSAGE);
            }
        }
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::sink::LeadSink;
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use std::cell::RefCell;

    impl LeadForm {
        /// Drives one submission the way the widget does across its messages.
        async fn submit<S: LeadSink + ?Sized>(&mut self, sink: &S) -> Result<(), SubmitRejected> {
            if let Some(lead) = self.begin_submit()? {
                let result = sink.insert(lead).await;
                self.complete(result);
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<Lead>>,
        fail: bool,
    }

    impl RecordingSink {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.received.borrow().len()
        }
    }

    impl LeadSink for RecordingSink {
        fn insert(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), SinkError>> {
            self.received.borrow_mut().push(lead);
            let result = if self.fail {
                Err(SinkError::Rejected {
                    status: 503,
                    body: "unavailable".to_string(),
                })
            } else {
                Ok(())
            };
            async move { result }.boxed_local()
        }
    }

    fn form_with(name: &str, company: &str, contact: &str, message: &str) -> LeadForm {
        let mut form = LeadForm::new();
        form.set_field(Field::Name, name.to_string());
        form.set_field(Field::Company, company.to_string());
        form.set_field(Field::Contact, contact.to_string());
        form.set_field(Field::Message, message.to_string());
        form
    }

    #[test]
    fn valid_submission_sends_one_lead_and_clears_fields() {
        let sink = RecordingSink::default();
        let mut form = form_with("Jane", "", "jane@x.com", "Need a dashboard");

        block_on(form.submit(&sink)).unwrap();

        let received = sink.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "Jane");
        assert_eq!(received[0].company, None);
        assert_eq!(received[0].contact, "jane@x.com");
        assert_eq!(received[0].message, "Need a dashboard");
        assert_eq!(received[0].source, "company-profile");

        assert_eq!(form.status().kind, StatusKind::Success);
        assert_eq!(form.status().message, SENT_MESSAGE);
        assert_eq!(form.fields(), &LeadFields::default());
        assert!(!form.is_submitting());
    }

    #[test]
    fn missing_name_makes_no_sink_call() {
        let sink = RecordingSink::default();
        let mut form = form_with("", "", "555-1234", "Hi");

        block_on(form.submit(&sink)).unwrap();

        assert_eq!(sink.calls(), 0);
        assert_eq!(form.status().kind, StatusKind::Error);
        assert_eq!(form.status().message, MISSING_FIELDS_MESSAGE);
        assert!(!form.is_submitting());
        assert_eq!(form.fields().contact, "555-1234");
    }

    #[test]
    fn whitespace_only_required_fields_are_rejected() {
        let sink = RecordingSink::default();
        for (name, contact, message) in [("  ", "a", "b"), ("a", "\t", "b"), ("a", "b", " \n ")] {
            let mut form = form_with(name, "Acme", contact, message);
            block_on(form.submit(&sink)).unwrap();
            assert_eq!(form.status().kind, StatusKind::Error);
        }
        assert_eq!(sink.calls(), 0);
    }

    #[test]
    fn sink_failure_keeps_fields_for_retry() {
        let sink = RecordingSink::failing();
        let mut form = form_with("Jane", "Acme", "jane@x.com", "Need a dashboard");
        let before = form.fields().clone();

        block_on(form.submit(&sink)).unwrap();

        assert_eq!(sink.calls(), 1);
        assert_eq!(form.status().kind, StatusKind::Error);
        assert_eq!(form.status().message, RETRY_MESSAGE);
        assert_eq!(form.fields(), &before);
        assert!(!form.is_submitting());
    }

    #[test]
    fn retry_after_failure_sends_again() {
        let failing = RecordingSink::failing();
        let working = RecordingSink::default();
        let mut form = form_with("Jane", "", "jane@x.com", "hello");

        block_on(form.submit(&failing)).unwrap();
        block_on(form.submit(&working)).unwrap();

        assert_eq!(failing.calls(), 1);
        assert_eq!(working.calls(), 1);
        assert_eq!(form.status().kind, StatusKind::Success);
    }

    #[test]
    fn transmitted_values_are_trimmed() {
        let sink = RecordingSink::default();
        let mut form = form_with("  Bo  ", "", " 555 ", " hi ");

        block_on(form.submit(&sink)).unwrap();

        let received = sink.received.borrow();
        assert_eq!(received[0].name, "Bo");
        assert_eq!(received[0].contact, "555");
        assert_eq!(received[0].message, "hi");
    }

    #[test]
    fn submitting_flag_spans_only_the_insert() {
        let mut form = form_with("Jane", "", "jane@x.com", "hello");
        assert!(!form.is_submitting());

        let lead = form.begin_submit().unwrap();
        assert!(lead.is_some());
        assert!(form.is_submitting());
        assert_eq!(form.status().kind, StatusKind::None);

        form.complete(Ok(()));
        assert!(!form.is_submitting());
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = form_with("Jane", "", "jane@x.com", "hello");
        let _lead = form.begin_submit().unwrap();

        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert!(form.is_submitting());
        assert_eq!(form.fields().name, "Jane");
    }

    #[test]
    fn begin_submit_clears_previous_status() {
        let sink = RecordingSink::failing();
        let mut form = form_with("Jane", "", "jane@x.com", "hello");
        block_on(form.submit(&sink)).unwrap();
        assert!(form.status().is_visible());

        let _lead = form.begin_submit().unwrap();
        assert!(!form.status().is_visible());
    }

    #[test]
    fn editing_a_field_hides_status() {
        let sink = RecordingSink::default();
        let mut form = form_with("", "", "", "");
        block_on(form.submit(&sink)).unwrap();
        assert_eq!(form.status().kind, StatusKind::Error);

        form.set_field(Field::Name, "J".to_string());
        assert_eq!(form.status(), &SubmitStatus::default());
    }
}
