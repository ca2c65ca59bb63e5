use crate::trello::model::Action;

/// Text of the most recent comment in `actions`.
///
/// Trello returns the feed newest-first, so the first entry carrying
/// `data.text` wins. The feed is not re-sorted here.
pub fn latest_comment(actions: &[Action]) -> Option<&str> {
    actions.iter().find_map(|a| a.data.text.as_deref())
}
