//! Entity Store reducer: the process-wide normalized bookmark table.
//!
//! The only mutation path is the additive merge below — there is no delete
//! or remove operation in this core.

use crate::services::normalizer::Entities;
use crate::store::action::Action;

/// Merges normalized entities into the table on fetch and save success.
///
/// Ids absent from the payload are untouched; ids present are replaced
/// wholesale with the incoming attributes.
pub fn reduce(entities: &mut Entities, action: &Action) {
    match action {
        Action::FetchSuccess { payload, .. } | Action::SaveSuccess { payload } => {
            for (id, attributes) in &payload.entities.bookmarks {
                entities.bookmarks.insert(id.clone(), attributes.clone());
            }
        }
        _ => {}
    }
}
