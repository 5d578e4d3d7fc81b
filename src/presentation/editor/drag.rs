use crate::domain::entities::ActiveContext;

/// Drag-and-drop reordering of the editor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { index: usize, origin: ActiveContext },
}

impl DragState {
    pub fn start(&mut self, index: usize, origin: ActiveContext) {
        *self = DragState::Dragging { index, origin };
    }

    /// The `(from, to)` reorder a drop on `target` in `context` should
    /// perform. Drops in another list, or on the dragged row itself, do nothing.
    pub fn drop_on(&self, target: usize, context: ActiveContext) -> Option<(usize, usize)> {
        match *self {
            DragState::Dragging { index, origin } if origin == context && index != target => {
                Some((index, target))
            }
            _ => None,
        }
    }

    pub fn end(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_in_the_same_list_reorders() {
        let mut drag = DragState::default();
        drag.start(3, ActiveContext::Top);
        assert_eq!(drag.drop_on(0, ActiveContext::Top), Some((3, 0)));
        assert_eq!(drag.drop_on(3, ActiveContext::Top), None);
    }

    #[test]
    fn drops_across_lists_are_ignored() {
        let mut drag = DragState::default();
        drag.start(1, ActiveContext::Top);
        assert_eq!(drag.drop_on(0, ActiveContext::Folder(2)), None);

        drag.start(1, ActiveContext::Folder(2));
        assert_eq!(drag.drop_on(0, ActiveContext::Folder(4)), None);
        assert_eq!(drag.drop_on(0, ActiveContext::Folder(2)), Some((1, 0)));
    }

    #[test]
    fn nothing_happens_without_a_drag() {
        let mut drag = DragState::default();
        assert_eq!(drag.drop_on(1, ActiveContext::Top), None);
        drag.start(0, ActiveContext::Top);
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.drop_on(1, ActiveContext::Top), None);
    }
}
