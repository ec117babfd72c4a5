/// The lifecycle of a view's fetch-then-render cycle.
///
/// Exactly one variant holds at any time. Re-entering `Loading` replaces the
/// whole value, so no stale payload survives a refetch. `Success` and
/// `Failure` are terminal: the view presents them until its key input changes
/// and a new activation enters `Loading` again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// Before the first activation. Never user-visible: activation enters
    /// `Loading` synchronously.
    Idle,

    /// The request is in flight.
    Loading,

    /// The request resolved with a payload.
    Success(T),

    /// The request failed; holds the user-facing message.
    Failure(String),
}

impl<T> ViewState<T> {
    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Retrieves the payload, if the state is `Success`.
    pub fn success(&self) -> Option<&T> {
        match self {
            ViewState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// Retrieves the user-facing message, if the state is `Failure`.
    pub fn failure(&self) -> Option<&str> {
        match self {
            ViewState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(ViewState::<()>::Idle, ViewState::default());
    }

    #[test]
    fn success_exposes_payload_only_in_success() {
        assert_eq!(Some(&3), ViewState::Success(3).success());
        assert_eq!(None, ViewState::<u32>::Loading.success());
        assert_eq!(None, ViewState::<u32>::Failure("failed".to_string()).success());
    }

    #[test]
    fn failure_exposes_message_only_in_failure() {
        assert_eq!(
            Some("failed"),
            ViewState::<u32>::Failure("failed".to_string()).failure()
        );
        assert_eq!(None, ViewState::Success(3).failure());
    }

    #[test]
    fn reentering_loading_clears_the_payload() {
        let mut state = ViewState::Success(vec![1, 2, 3]);

        state = ViewState::Loading;

        assert!(state.is_loading());
        assert_eq!(None, state.success());
    }
}
