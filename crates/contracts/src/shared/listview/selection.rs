/// The single record currently targeted by a detail or edit dialog.
///
/// A tagged union instead of a nullable record reference: the backing
/// collection can refresh underneath the dialog, so screens hold an id
/// and look the record up at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<Id> {
    None,
    Viewing(Id),
    Editing(Id),
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Selection::None
    }
}

impl<Id: PartialEq> Selection<Id> {
    /// Open a detail dialog, replacing any previous selection.
    pub fn view(&mut self, id: Id) {
        *self = Selection::Viewing(id);
    }

    /// Open an edit dialog, replacing any previous selection.
    pub fn edit(&mut self, id: Id) {
        *self = Selection::Editing(id);
    }

    /// Explicit close, successful submit, or backdrop click.
    pub fn close(&mut self) {
        *self = Selection::None;
    }

    pub fn current(&self) -> Option<&Id> {
        match self {
            Selection::None => None,
            Selection::Viewing(id) | Selection::Editing(id) => Some(id),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Selection::None)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Selection::Editing(_))
    }

    /// Drop a selection whose record disappeared in a refetch, so a
    /// stale id can never be rendered.
    pub fn retain_existing(&mut self, exists: impl Fn(&Id) -> bool) {
        if let Some(id) = self.current() {
            if !exists(id) {
                self.close();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_single_slot() {
        let mut sel = Selection::default();
        sel.view(1);
        sel.edit(2);
        assert_eq!(sel, Selection::Editing(2));
        assert_eq!(sel.current(), Some(&2));
        assert!(sel.is_editing());
    }

    #[test]
    fn close_empties_the_slot() {
        let mut sel = Selection::Viewing(7);
        sel.close();
        assert_eq!(sel, Selection::None);
        assert_eq!(sel.current(), None);
        assert!(!sel.is_open());
    }

    #[test]
    fn refetch_drops_stale_ids() {
        let remaining = [1, 3];
        let mut sel = Selection::Editing(2);
        sel.retain_existing(|id| remaining.contains(id));
        assert_eq!(sel, Selection::None);

        let mut kept = Selection::Viewing(3);
        kept.retain_existing(|id| remaining.contains(id));
        assert_eq!(kept, Selection::Viewing(3));
    }
}
