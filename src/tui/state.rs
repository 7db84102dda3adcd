//! Checklist selection state
//!
//! Pure data: the item list, the cursor and the selection set. Nothing
//! here touches the terminal; the session drives it and renders its lines.

/// Instruction line shown above the checklist
pub const DEFAULT_HEADER: &str = "Select branches to delete (use ↑/↓ or j/k to navigate, Space to select, Enter to confirm, q to quit):";

/// Suffix shown after a locked item's label
pub const LOCKED_ANNOTATION: &str = " (checked out)";

/// Number of lines rendered before the first item
pub const HEADER_LINES: usize = 2;

/// One checklist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Name of the underlying thing (a branch name)
    pub label: String,
    /// In active use; can never be selected
    pub locked: bool,
}

impl Item {
    /// Create a selectable item
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            locked: false,
        }
    }

    /// Create a locked item
    pub fn locked(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            locked: true,
        }
    }
}

/// Cursor and selection over a fixed list of items
#[derive(Debug, Clone)]
pub struct SelectionState {
    items: Vec<Item>,
    cursor: usize,
    /// Membership flag per item index; never true for a locked item
    selected: Vec<bool>,
    header: String,
}

impl SelectionState {
    /// Create state with the cursor on the first item and nothing selected
    pub fn new(items: Vec<Item>) -> Self {
        let selected = vec![false; items.len()];
        Self {
            items,
            cursor: 0,
            selected,
            header: DEFAULT_HEADER.to_string(),
        }
    }

    /// Replace the instruction line
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Current cursor index (meaningless when the list is empty)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the item at `index` is selected
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Move the cursor up one row; returns whether it moved
    pub fn move_cursor_up(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor down one row; returns whether it moved
    pub fn move_cursor_down(&mut self) -> bool {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Flip selection of the item under the cursor
    ///
    /// Locked items are left untouched. Returns whether membership changed.
    pub fn toggle_selection(&mut self) -> bool {
        match self.items.get(self.cursor) {
            Some(item) if !item.locked => {
                self.selected[self.cursor] = !self.selected[self.cursor];
                true
            }
            _ => false,
        }
    }

    /// Labels of the selected items, in list order
    pub fn selected_labels(&self) -> Vec<String> {
        self.items
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(item, _)| item.label.clone())
            .collect()
    }

    /// Lines of the current frame: header, blank line, one line per item
    ///
    /// Locked rows are padded to the label column with no cursor marker
    /// or checkbox, even when the cursor rests on them.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(HEADER_LINES + self.items.len());
        lines.push(self.header.clone());
        lines.push(String::new());

        for (i, item) in self.items.iter().enumerate() {
            if item.locked {
                lines.push(format!("      {}{}", item.label, LOCKED_ANNOTATION));
                continue;
            }

            let cursor = if i == self.cursor { "> " } else { "  " };
            let checkbox = if self.selected[i] { "[x] " } else { "[ ] " };
            lines.push(format!("{cursor}{checkbox}{}", item.label));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<Item> {
        names.iter().map(|name| Item::new(*name)).collect()
    }

    #[test]
    fn test_new_state() {
        let state = SelectionState::new(items(&["feature-1", "feature-2", "bugfix-1"]));
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.items().len(), 3);
        assert!(state.selected_labels().is_empty());
    }

    #[test]
    fn test_move_cursor_down_stops_at_last() {
        let mut state = SelectionState::new(items(&["a", "b", "c"]));
        assert!(state.move_cursor_down());
        assert!(state.move_cursor_down());
        assert_eq!(state.cursor(), 2);

        assert!(!state.move_cursor_down());
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_move_cursor_up_stops_at_first() {
        let mut state = SelectionState::new(items(&["a", "b", "c"]));
        assert!(!state.move_cursor_up());
        assert_eq!(state.cursor(), 0);

        state.move_cursor_down();
        state.move_cursor_down();
        assert!(state.move_cursor_up());
        assert!(state.move_cursor_up());
        assert!(!state.move_cursor_up());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut state = SelectionState::new(items(&["a", "b", "c", "d"]));
        // Deterministic mixed walk that leans on both ends
        let moves = "ddddddduuduuuuuuudddududdddduuuu";
        for m in moves.chars() {
            match m {
                'u' => state.move_cursor_up(),
                _ => state.move_cursor_down(),
            };
            assert!(state.cursor() < 4, "cursor escaped: {}", state.cursor());
        }
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut state = SelectionState::new(items(&["only"]));
        assert!(!state.move_cursor_down());
        assert!(!state.move_cursor_up());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut state = SelectionState::new(items(&["a", "b"]));
        assert!(state.toggle_selection());
        assert!(state.is_selected(0));
        assert!(state.toggle_selection());
        assert!(!state.is_selected(0));
        assert!(state.selected_labels().is_empty());
    }

    #[test]
    fn test_toggle_multiple() {
        let mut state = SelectionState::new(items(&["a", "b", "c"]));
        state.toggle_selection();
        state.move_cursor_down();
        state.move_cursor_down();
        state.toggle_selection();
        assert_eq!(state.selected_labels(), vec!["a", "c"]);
    }

    #[test]
    fn test_selected_labels_follow_list_order() {
        let mut state = SelectionState::new(items(&["a", "b", "c"]));
        state.move_cursor_down();
        state.move_cursor_down();
        state.toggle_selection();
        state.move_cursor_up();
        state.move_cursor_up();
        state.toggle_selection();
        assert_eq!(state.selected_labels(), vec!["a", "c"]);
    }

    #[test]
    fn test_toggle_locked_item_is_noop() {
        let mut state = SelectionState::new(vec![
            Item::new("branch1"),
            Item::locked("branch2"),
            Item::new("branch3"),
        ]);
        state.move_cursor_down();

        assert!(!state.toggle_selection());
        assert!(!state.toggle_selection());
        assert!(!state.toggle_selection());
        assert!(!state.is_selected(1));

        // Arriving from below changes nothing either
        state.move_cursor_down();
        state.move_cursor_up();
        assert!(!state.toggle_selection());
        assert!(state.selected_labels().is_empty());
    }

    #[test]
    fn test_round_trip_with_locked_item() {
        let mut state = SelectionState::new(vec![
            Item::new("feature-1"),
            Item::locked("release"),
            Item::new("bugfix-1"),
        ]);
        state.toggle_selection();
        assert!(state.move_cursor_down());
        assert!(state.move_cursor_down());
        assert_eq!(state.cursor(), 2);
        state.toggle_selection();

        assert_eq!(state.selected_labels(), vec!["feature-1", "bugfix-1"]);
    }

    #[test]
    fn test_render_lines() {
        let state = SelectionState::new(items(&["branch1", "branch2"]));
        let lines = state.render_lines();
        assert_eq!(lines[0], DEFAULT_HEADER);
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "> [ ] branch1");
        assert_eq!(lines[3], "  [ ] branch2");
    }

    #[test]
    fn test_render_lines_with_selection() {
        let mut state = SelectionState::new(items(&["branch1", "branch2"]));
        state.toggle_selection();
        state.move_cursor_down();
        let lines = state.render_lines();
        assert_eq!(lines[2], "  [x] branch1");
        assert_eq!(lines[3], "> [ ] branch2");
    }

    #[test]
    fn test_render_locked_row_has_no_marker() {
        let mut state = SelectionState::new(vec![Item::new("branch1"), Item::locked("branch2")]);
        assert_eq!(state.render_lines()[3], "      branch2 (checked out)");

        // Cursor on the locked row: still no marker, and no other row has one
        state.move_cursor_down();
        let lines = state.render_lines();
        assert_eq!(lines[3], "      branch2 (checked out)");
        assert_eq!(lines[2], "  [ ] branch1");
        assert!(!lines.iter().any(|line| line.starts_with("> ")));
    }

    #[test]
    fn test_render_line_count_depends_on_length_only() {
        let mut state = SelectionState::new(vec![
            Item::new("a"),
            Item::locked("b"),
            Item::new("c"),
        ]);
        let expected = HEADER_LINES + 3;
        assert_eq!(state.render_lines().len(), expected);

        state.toggle_selection();
        state.move_cursor_down();
        assert_eq!(state.render_lines().len(), expected);
        state.move_cursor_down();
        state.toggle_selection();
        assert_eq!(state.render_lines().len(), expected);

        // Rendering is repeatable
        assert_eq!(state.render_lines(), state.render_lines());
    }

    #[test]
    fn test_empty_list() {
        let mut state = SelectionState::new(Vec::new());
        assert!(state.items().is_empty());
        assert!(!state.move_cursor_up());
        assert!(!state.move_cursor_down());
        assert!(!state.toggle_selection());
        assert!(state.selected_labels().is_empty());
        assert!(!state.is_selected(0));

        let lines = state.render_lines();
        assert_eq!(lines, vec![DEFAULT_HEADER.to_string(), String::new()]);
    }

    #[test]
    fn test_custom_header() {
        let state = SelectionState::new(items(&["x"])).with_header("Pick:");
        assert_eq!(state.render_lines()[0], "Pick:");
    }
}
