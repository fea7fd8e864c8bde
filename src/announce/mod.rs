//! Announcement de-duplication.
//!
//! The announcement collaborator should only speak a dominant label when it
//! differs from the last one spoken. The memory of what was spoken lives in a
//! caller-owned [`AnnouncementState`]; one state per session, mutated through
//! `&mut` so calls on the same state are serialized.
//!
//! By default an empty frame leaves the state untouched, so an object that
//! disappears and comes back is not announced again. [`ResetPolicy`] lets a
//! caller opt into forgetting the last label on empty frames instead.

/// What happens to the remembered label when a frame has no dominant label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Keep the last spoken label.
    #[default]
    Never,
    /// Forget the last spoken label so a reappearing object is re-announced.
    OnEmptyFrame,
}

/// Session-scoped memory of the last announced label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnouncementState {
    last_spoken_label: Option<String>,
}

impl AnnouncementState {
    /// Creates an idle state with nothing spoken yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last announced label, if any.
    pub fn last_spoken_label(&self) -> Option<&str> {
        self.last_spoken_label.as_deref()
    }

    /// Returns true while nothing has been announced.
    pub fn is_idle(&self) -> bool {
        self.last_spoken_label.is_none()
    }

    /// Forgets the last announced label.
    pub fn reset(&mut self) {
        self.last_spoken_label = None;
    }
}

/// Decides whether `candidate` should be announced.
///
/// Returns `None` for an empty candidate or one equal to the last spoken
/// label; otherwise records the candidate as spoken and returns it.
pub fn decide_announcement(candidate: &str, state: &mut AnnouncementState) -> Option<String> {
    decide_announcement_with(candidate, state, ResetPolicy::Never)
}

/// Like [`decide_announcement`], applying `policy` to empty candidates.
pub fn decide_announcement_with(
    candidate: &str,
    state: &mut AnnouncementState,
    policy: ResetPolicy,
) -> Option<String> {
    if candidate.is_empty() {
        if policy == ResetPolicy::OnEmptyFrame {
            state.reset();
        }
        return None;
    }
    if state.last_spoken_label() == Some(candidate) {
        return None;
    }
    state.last_spoken_label = Some(candidate.to_owned());
    Some(candidate.to_owned())
}

#[cfg(test)]
mod tests {
    use super::{decide_announcement, decide_announcement_with, AnnouncementState, ResetPolicy};

    #[test]
    fn empty_candidate_leaves_state_alone() {
        let mut state = AnnouncementState::new();
        assert_eq!(decide_announcement("", &mut state), None);
        assert!(state.is_idle());

        decide_announcement("cup", &mut state);
        assert_eq!(decide_announcement("", &mut state), None);
        assert_eq!(state.last_spoken_label(), Some("cup"));
    }

    #[test]
    fn reset_policy_clears_on_empty() {
        let mut state = AnnouncementState::new();
        decide_announcement_with("cup", &mut state, ResetPolicy::OnEmptyFrame);
        assert_eq!(
            decide_announcement_with("", &mut state, ResetPolicy::OnEmptyFrame),
            None
        );
        assert!(state.is_idle());
    }
}
