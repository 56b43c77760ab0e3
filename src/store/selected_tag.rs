//! Selected-tag reducer: which tag the collaborating UI is viewing.

use crate::store::action::{Action, SelectedTag};

pub fn reduce(selected: &mut SelectedTag, action: &Action) {
    if let Action::SelectTag(tag) = action {
        *selected = SelectedTag::Selected(tag.clone());
    }
}
