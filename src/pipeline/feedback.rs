use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::models::lead_models::SubmissionOutcome;

// User-facing copy, carried from the landing page.
pub const MSG_SENT: &str = "✅ Заявку відправлено! Ми зв'яжемося з вами найближчим часом.";
pub const MSG_SAVED: &str = "✅ Заявку збережено! Ми зв'яжемося з вами найближчим часом.";
pub const MSG_VALIDATION: &str = "Будь ласка, заповніть всі обов'язкові поля";
pub const MSG_ERROR: &str = "Виникла помилка. Спробуйте ще раз або напишіть нам у Telegram.";

pub const SUCCESS_AUTO_HIDE: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The only rendering operations the pipeline needs. The HTTP handler backs
/// this with a response body; tests back it with a mock. The pipeline never
/// touches a rendering surface directly.
#[cfg_attr(test, automock)]
pub trait PresentationPort: Send {
    fn set_message(&mut self, kind: MessageKind, text: &str, auto_hide: Option<Duration>);
    fn clear_form(&mut self);
    fn set_submit_enabled(&mut self, enabled: bool);
}

/// Maps a terminal submission outcome onto the port.
///
/// Deliberate quirk kept from the original: an all-Failed/Skipped round
/// presents the same success styling as a real delivery (the lead is safe
/// in the fallback log and the user experience does not distinguish the
/// two), while a failure of the dispatch attempt itself presents as an
/// error even though that lead is in the fallback log too.
pub fn present(outcome: &SubmissionOutcome, port: &mut dyn PresentationPort) {
    match outcome {
        SubmissionOutcome::Rejected(_) => {
            port.set_message(MessageKind::Error, MSG_VALIDATION, None);
        }
        SubmissionOutcome::Delivered => {
            port.set_message(MessageKind::Success, MSG_SENT, Some(SUCCESS_AUTO_HIDE));
            port.clear_form();
        }
        SubmissionOutcome::SavedLocally => {
            port.set_message(MessageKind::Success, MSG_SAVED, Some(SUCCESS_AUTO_HIDE));
            port.clear_form();
        }
        SubmissionOutcome::DispatchFailed => {
            port.set_message(MessageKind::Error, MSG_ERROR, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lead_models::ValidationFailure;

    #[test]
    fn delivery_shows_auto_hiding_success_and_clears_the_form() {
        let mut port = MockPresentationPort::new();
        port.expect_set_message()
            .withf(|kind, text, hide| {
                *kind == MessageKind::Success && text == MSG_SENT && *hide == Some(SUCCESS_AUTO_HIDE)
            })
            .times(1)
            .return_const(());
        port.expect_clear_form().times(1).return_const(());

        present(&SubmissionOutcome::Delivered, &mut port);
    }

    #[test]
    fn saved_locally_still_presents_as_success() {
        let mut port = MockPresentationPort::new();
        port.expect_set_message()
            .withf(|kind, text, hide| {
                *kind == MessageKind::Success && text == MSG_SAVED && *hide == Some(SUCCESS_AUTO_HIDE)
            })
            .times(1)
            .return_const(());
        port.expect_clear_form().times(1).return_const(());

        present(&SubmissionOutcome::SavedLocally, &mut port);
    }

    #[test]
    fn rejection_keeps_the_form_and_never_auto_hides() {
        let mut port = MockPresentationPort::new();
        port.expect_set_message()
            .withf(|kind, text, hide| {
                *kind == MessageKind::Error && text == MSG_VALIDATION && hide.is_none()
            })
            .times(1)
            .return_const(());
        port.expect_clear_form().times(0);

        present(
            &SubmissionOutcome::Rejected(ValidationFailure::NameTooShort),
            &mut port,
        );
    }

    #[test]
    fn dispatch_error_presents_as_error_unlike_the_settled_failure_path() {
        let mut port = MockPresentationPort::new();
        port.expect_set_message()
            .withf(|kind, text, hide| {
                *kind == MessageKind::Error && text == MSG_ERROR && hide.is_none()
            })
            .times(1)
            .return_const(());
        port.expect_clear_form().times(0);

        present(&SubmissionOutcome::DispatchFailed, &mut port);
    }
}
