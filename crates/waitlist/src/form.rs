use crate::error::SubscribeRejection;

/// Where the current (or last) submission stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Pending,
    Succeeded,
    Failed { status: u16, message: String },
}

impl Default for SubmitState {
    fn default() -> Self {
        SubmitState::Idle
    }
}

/// A second submit was attempted while one is in flight.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubmitRefused;

impl std::fmt::Display for SubmitRefused {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a subscription request is already pending")
    }
}

impl std::error::Error for SubmitRefused {}

/// Client-side state for the waitlist email form.
///
/// The form itself performs no I/O; callers take the email from
/// `begin_submit`, run the request however they like (network client or a
/// test double), and report back through `complete`. While a submission is
/// pending the submit control is refused, so at most one request is in
/// flight per form. The input field is cleared only on success.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubscribeForm {
    input: String,
    state: SubmitState,
}

impl SubscribeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmitState::Pending
    }

    /// Starts a submission, returning the email to send.
    pub fn begin_submit(&mut self) -> Result<String, SubmitRefused> {
        if self.is_pending() {
            return Err(SubmitRefused);
        }
        self.state = SubmitState::Pending;
        Ok(self.input.clone())
    }

    /// Applies the outcome of the in-flight submission.
    ///
    /// Ignored (returns `false`) unless a submission is actually pending,
    /// so a stale completion cannot clobber a newer form state.
    pub fn complete(&mut self, outcome: Result<(), SubscribeRejection>) -> bool {
        if !self.is_pending() {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.state = SubmitState::Succeeded;
                self.input.clear();
            }
            Err(rejection) => {
                self.state = SubmitState::Failed {
                    status: rejection.status,
                    message: rejection.message,
                };
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{SubmitState, SubscribeForm};
    use crate::error::SubscribeRejection;

    #[test]
    fn submit_is_refused_while_pending() {
        let mut form = SubscribeForm::new();
        form.set_input("joe@x.com");
        let email = form.begin_submit().expect("first submit");
        assert_eq!(email, "joe@x.com");
        assert!(form.begin_submit().is_err());
    }

    #[test]
    fn success_clears_the_input() {
        let mut form = SubscribeForm::new();
        form.set_input("joe@x.com");
        form.begin_submit().expect("submit");
        assert!(form.complete(Ok(())));
        assert_eq!(*form.state(), SubmitState::Succeeded);
        assert_eq!(form.input(), "");
    }

    #[test]
    fn failure_keeps_the_input_and_the_status() {
        let mut form = SubscribeForm::new();
        form.set_input("joe@x.com");
        form.begin_submit().expect("submit");
        form.complete(Err(SubscribeRejection {
            status: 400,
            message: "Invalid Resource".into(),
        }));
        assert_eq!(form.input(), "joe@x.com");
        assert_eq!(
            *form.state(),
            SubmitState::Failed {
                status: 400,
                message: "Invalid Resource".into()
            }
        );

        // The form is usable again after a failure.
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut form = SubscribeForm::new();
        form.set_input("joe@x.com");
        assert!(!form.complete(Ok(())));
        assert_eq!(*form.state(), SubmitState::Idle);
        assert_eq!(form.input(), "joe@x.com");
    }
}
