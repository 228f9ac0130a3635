/// Rows taken out of a list before the server confirmed the delete
///
/// Only the removed rows are kept, with their positions. Rolling back puts
/// them into whatever the list holds by then, so a page reloaded while the
/// request was in flight is not replaced by stale rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRemoval<T> {
    removed: Vec<(usize, T)>,
}

impl<T: Clone> PendingRemoval<T> {
    /// Remove matching rows right away. `None` when nothing matched.
    pub fn apply(
        items: &mut Vec<T>,
        total: &mut usize,
        matches: impl Fn(&T) -> bool,
    ) -> Option<Self> {
        let removed: Vec<(usize, T)> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| matches(item))
            .map(|(index, item)| (index, item.clone()))
            .collect();
        if removed.is_empty() {
            return None;
        }
        items.retain(|item| !matches(item));
        *total = total.saturating_sub(removed.len());
        Some(Self { removed })
    }

    /// Put the rows back after a failed delete.
    ///
    /// Rows that are already back in `items` (a reload brought them) are not
    /// inserted twice.
    pub fn rollback(self, items: &mut Vec<T>, total: &mut usize, matches: impl Fn(&T) -> bool) {
        if items.iter().any(|item| matches(item)) {
            return;
        }
        for (index, item) in self.removed {
            let index = index.min(items.len());
            items.insert(index, item);
            *total += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_and_restores_rows() {
        let mut items = vec![1, 2, 3];
        let mut total = 13;
        let pending = PendingRemoval::apply(&mut items, &mut total, |v| *v == 2).unwrap();
        assert_eq!(items, vec![1, 3]);
        assert_eq!(total, 12);

        pending.rollback(&mut items, &mut total, |v| *v == 2);
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(total, 13);
    }

    #[test]
    fn rollback_keeps_rows_of_a_newer_reload() {
        let mut items = vec![1, 2, 3];
        let mut total = 3;
        let pending = PendingRemoval::apply(&mut items, &mut total, |v| *v == 2).unwrap();

        // a reload lands while the delete is still running
        items = vec![1, 3, 4];
        total = 3;
        pending.rollback(&mut items, &mut total, |v| *v == 2);
        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(total, 4);
    }

    #[test]
    fn rollback_does_not_duplicate_row_brought_back_by_reload() {
        let mut items = vec![1, 2, 3];
        let mut total = 3;
        let pending = PendingRemoval::apply(&mut items, &mut total, |v| *v == 2).unwrap();

        items = vec![1, 2, 3, 5];
        total = 4;
        pending.rollback(&mut items, &mut total, |v| *v == 2);
        assert_eq!(items, vec![1, 2, 3, 5]);
        assert_eq!(total, 4);
    }

    #[test]
    fn rows_removed_from_the_end_go_back_to_the_end() {
        let mut items = vec![1, 2, 3];
        let mut total = 3;
        let pending = PendingRemoval::apply(&mut items, &mut total, |v| *v == 3).unwrap();
        items.clear();
        pending.rollback(&mut items, &mut total, |v| *v == 3);
        assert_eq!(items, vec![3]);
    }

    #[test]
    fn nothing_to_remove() {
        let mut items = vec![1];
        let mut total = 1;
        assert!(PendingRemoval::apply(&mut items, &mut total, |v| *v == 9).is_none());
        assert_eq!(items, vec![1]);
    }
}
