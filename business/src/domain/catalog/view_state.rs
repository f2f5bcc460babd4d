use crate::domain::product::draft::EditDraft;

/// Which form panel is visible. Exactly one is shown at any time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Adding,
    Editing(EditDraft),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    EditSelected(EditDraft),
    UpdateSucceeded,
    Cancelled,
}

impl ViewState {
    pub fn transition(self, event: ViewEvent) -> ViewState {
        match event {
            // Selecting another entry while editing replaces the draft.
            ViewEvent::EditSelected(draft) => ViewState::Editing(draft),
            ViewEvent::UpdateSucceeded | ViewEvent::Cancelled => ViewState::Adding,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ViewState::Editing(_))
    }

    pub fn edit_draft(&self) -> Option<&EditDraft> {
        match self {
            ViewState::Editing(draft) => Some(draft),
            ViewState::Adding => None,
        }
    }
}
