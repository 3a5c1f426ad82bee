use crate::models::TagList;

/// Returns `list` with `tag` appended, or an unchanged copy when the trimmed
/// tag is blank or already present (case-sensitive).
pub fn add_tag(list: &TagList, tag: &str) -> TagList {
    let mut next = list.clone();
    next.add(tag);
    next
}

/// Returns `list` without any entry exactly equal to `tag`.
pub fn remove_tag(list: &TagList, tag: &str) -> TagList {
    let mut next = list.clone();
    next.remove(tag);
    next
}
