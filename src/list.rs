//! List Operations
//!
//! Pure mutations on the to-do sequence, shared by the UI layer.

use std::cmp::Ordering;

use crate::models::{SortDirection, TodoItem};

/// Rejection for blank text on add or edit-commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyText;

/// Trim and append; blank text is rejected and the sequence is untouched.
pub fn push_trimmed(items: &mut Vec<TodoItem>, id: u32, text: &str) -> Result<(), EmptyText> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EmptyText);
    }
    items.push(TodoItem::new(id, text.to_string()));
    Ok(())
}

/// Replace the text at `position` in place; blank text is rejected.
pub fn replace_trimmed(
    items: &mut [TodoItem],
    position: usize,
    text: &str,
) -> Result<(), EmptyText> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EmptyText);
    }
    if let Some(item) = items.get_mut(position) {
        item.text = text.to_string();
    }
    Ok(())
}

/// Remove the item at `position`, shifting the tail left by one.
pub fn remove_at(items: &mut Vec<TodoItem>, position: usize) {
    if position < items.len() {
        items.remove(position);
    }
}

/// Move the item at `from` so it ends up at `to`. Equal positions are a no-op.
pub fn move_item(items: &mut Vec<TodoItem>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Position of the item with the given id in the current order.
pub fn position_of(items: &[TodoItem], id: u32) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

/// Destructively sort the sequence in the given direction.
pub fn sort_items(items: &mut [TodoItem], direction: SortDirection) {
    items.sort_by(|a, b| {
        let ord = compare_texts(&a.text, &b.text);
        if direction.is_ascending() {
            ord
        } else {
            ord.reverse()
        }
    });
}

/// Dual comparator: numeric when both texts parse as numbers, lexical otherwise.
fn compare_texts(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => compare_lexical(a, b),
    }
}

/// Case-insensitive ordering with a case-sensitive tiebreak, standing in
/// for the browser's locale collation.
fn compare_lexical(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded == Ordering::Equal {
        a.cmp(b)
    } else {
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_items(texts: &[&str]) -> Vec<TodoItem> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| TodoItem::new(i as u32 + 1, text.to_string()))
            .collect()
    }

    fn texts(items: &[TodoItem]) -> Vec<&str> {
        items.iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_push_trimmed_appends_in_order() {
        let mut items = Vec::new();
        push_trimmed(&mut items, 1, "first").unwrap();
        push_trimmed(&mut items, 2, "  second  ").unwrap();
        assert_eq!(texts(&items), vec!["first", "second"]);
        assert_eq!(items[1].id, 2);
    }

    #[test]
    fn test_push_trimmed_rejects_blank() {
        let mut items = make_items(&["a"]);
        assert_eq!(push_trimmed(&mut items, 2, ""), Err(EmptyText));
        assert_eq!(push_trimmed(&mut items, 2, "   "), Err(EmptyText));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_replace_trimmed() {
        let mut items = make_items(&["a", "b", "c"]);
        replace_trimmed(&mut items, 1, " new ").unwrap();
        assert_eq!(texts(&items), vec!["a", "new", "c"]);
    }

    #[test]
    fn test_replace_trimmed_rejects_blank() {
        let mut items = make_items(&["a", "b"]);
        assert_eq!(replace_trimmed(&mut items, 0, "  "), Err(EmptyText));
        assert_eq!(texts(&items), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_at_shifts_tail() {
        let mut items = make_items(&["a", "b", "c"]);
        remove_at(&mut items, 1);
        assert_eq!(texts(&items), vec!["a", "c"]);
        remove_at(&mut items, 1);
        remove_at(&mut items, 0);
        assert!(items.is_empty());
    }

    #[test]
    fn test_move_item() {
        let mut items = make_items(&["a", "b", "c"]);
        move_item(&mut items, 0, 2);
        assert_eq!(texts(&items), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_item_same_position_is_noop() {
        let mut items = make_items(&["a", "b", "c"]);
        move_item(&mut items, 1, 1);
        assert_eq!(texts(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_numeric() {
        let mut items = make_items(&["10", "2", "1"]);
        sort_items(&mut items, SortDirection::Ascending);
        assert_eq!(texts(&items), vec!["1", "2", "10"]);
        sort_items(&mut items, SortDirection::Descending);
        assert_eq!(texts(&items), vec!["10", "2", "1"]);
    }

    #[test]
    fn test_sort_lexical() {
        let mut items = make_items(&["banana", "apple"]);
        sort_items(&mut items, SortDirection::Ascending);
        assert_eq!(texts(&items), vec!["apple", "banana"]);
        sort_items(&mut items, SortDirection::Descending);
        assert_eq!(texts(&items), vec!["banana", "apple"]);
    }

    #[test]
    fn test_sort_mixed_numeric_and_lexical() {
        // Numeric pairs compare numerically, the rest lexically
        let mut items = make_items(&["b", "10", "a", "2"]);
        sort_items(&mut items, SortDirection::Ascending);
        assert_eq!(texts(&items), vec!["2", "10", "a", "b"]);
    }

    #[test]
    fn test_position_of() {
        let items = make_items(&["a", "b", "c"]);
        assert_eq!(position_of(&items, 2), Some(1));
        assert_eq!(position_of(&items, 99), None);
    }
}
