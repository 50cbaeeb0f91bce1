//! Commit lifecycle of a record being created or edited.
//!
//! One state machine serves both flows: `Idle → Drafting → Submitting →
//! {committed back to Idle | Failed}`. The hosting page owns the draft and
//! the commit boundary; forms are fully controlled and hold no state.

/// Draft payload: `target` is `None` while creating and the record id while
/// editing; `fields` is the entity's editable field set.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft<D> {
    pub target: Option<String>,
    pub fields: D,
}

impl<D: Default> RecordDraft<D> {
    pub fn create() -> Self {
        Self {
            target: None,
            fields: D::default(),
        }
    }
}

impl<D> RecordDraft<D> {
    pub fn edit(target: impl Into<String>, fields: D) -> Self {
        Self {
            target: Some(target.into()),
            fields,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DraftState<D> {
    #[default]
    Idle,
    Drafting(D),
    Submitting(D),
    Failed(D, String),
}

impl<D: Clone> DraftState<D> {
    pub fn open(draft: D) -> Self {
        DraftState::Drafting(draft)
    }

    /// The dialog stays visible through a failed submit so the user can retry.
    pub fn is_open(&self) -> bool {
        !matches!(self, DraftState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, DraftState::Submitting(_))
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            DraftState::Idle => None,
            DraftState::Drafting(d) | DraftState::Submitting(d) | DraftState::Failed(d, _) => {
                Some(d)
            }
        }
    }

    /// Keystroke update. Ignored while a submit is in flight; a change after
    /// a failure returns to `Drafting`.
    pub fn update(&mut self, draft: D) {
        match self {
            DraftState::Drafting(_) | DraftState::Failed(..) => *self = DraftState::Drafting(draft),
            DraftState::Idle | DraftState::Submitting(_) => {}
        }
    }

    /// Move into `Submitting`, handing the payload to the caller. Returns
    /// `None` when there is nothing to submit or a submit is already running.
    pub fn begin_submit(&mut self) -> Option<D> {
        match self {
            DraftState::Drafting(d) | DraftState::Failed(d, _) => {
                let payload = d.clone();
                *self = DraftState::Submitting(payload.clone());
                Some(payload)
            }
            DraftState::Idle | DraftState::Submitting(_) => None,
        }
    }

    /// Record a failed submit; the draft is kept for retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        if let DraftState::Submitting(d) = self {
            *self = DraftState::Failed(d.clone(), message.into());
        }
    }

    /// Successful commit closes the workflow.
    pub fn commit(&mut self) {
        if matches!(self, DraftState::Submitting(_)) {
            *self = DraftState::Idle;
        }
    }

    pub fn cancel(&mut self) {
        *self = DraftState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_commit() {
        let mut state = DraftState::open("draft".to_string());
        assert!(state.is_open());
        assert_eq!(state.begin_submit().as_deref(), Some("draft"));
        assert!(state.is_submitting());
        state.commit();
        assert_eq!(state, DraftState::Idle);
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut state = DraftState::open(1);
        assert_eq!(state.begin_submit(), Some(1));
        assert_eq!(state.begin_submit(), None);
    }

    #[test]
    fn test_failure_keeps_draft_for_retry() {
        let mut state = DraftState::open(7);
        state.begin_submit();
        state.fail("HTTP 500");
        assert!(state.is_open());
        assert_eq!(state.draft(), Some(&7));
        // Retrying from Failed is allowed.
        assert_eq!(state.begin_submit(), Some(7));
    }

    #[test]
    fn test_update_ignored_while_submitting() {
        let mut state = DraftState::open(1);
        state.begin_submit();
        state.update(2);
        assert_eq!(state.draft(), Some(&1));
    }

    #[test]
    fn test_update_after_failure_returns_to_drafting() {
        let mut state = DraftState::open(1);
        state.begin_submit();
        state.fail("boom");
        state.update(2);
        assert_eq!(state, DraftState::Drafting(2));
    }

    #[test]
    fn test_record_draft_modes() {
        let create = RecordDraft::<String>::create();
        assert!(!create.is_edit());
        let edit = RecordDraft::edit("x1", "fields".to_string());
        assert!(edit.is_edit());
        assert_eq!(edit.target.as_deref(), Some("x1"));
    }
}
