/// Lifecycle of a form submission.
///
/// `Idle -> Submitting -> Succeeded` on a good save,
/// `Idle -> Submitting -> Failed` when the server refuses,
/// `Idle -> Failed` when client-side validation blocks the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitState {
    /// Enter `Submitting`. Returns `false` (and changes nothing) while a
    /// request is already in flight or after the form has been saved.
    pub fn begin(&mut self) -> bool {
        match self {
            Self::Idle | Self::Failed(_) => {
                *self = Self::Submitting;
                true
            }
            Self::Submitting | Self::Succeeded => false,
        }
    }

    pub fn succeed(&mut self) {
        *self = Self::Succeeded;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Failed(message.into());
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Only a successful save leaves the page.
    pub fn should_navigate_back(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_navigates_back() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        assert!(state.is_submitting());
        state.succeed();
        assert!(state.should_navigate_back());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn second_click_while_submitting_is_ignored() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        assert!(!state.begin());
        assert_eq!(state, SubmitState::Submitting);
    }

    #[test]
    fn failure_keeps_page_and_allows_retry() {
        let mut state = SubmitState::default();
        state.begin();
        state.fail("Код уже используется");
        assert!(!state.should_navigate_back());
        assert_eq!(state.error(), Some("Код уже используется"));
        assert!(state.begin());
    }

    #[test]
    fn saved_form_cannot_be_resubmitted() {
        let mut state = SubmitState::Succeeded;
        assert!(!state.begin());
    }
}
