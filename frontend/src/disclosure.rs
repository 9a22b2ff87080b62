/// Which single entry of an accordion or menu is open.
///
/// Siblings share one register, so opening an entry closes whatever was open
/// before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disclosure<K> {
    expanded: Option<K>,
}

impl<K> Default for Disclosure<K> {
    fn default() -> Self {
        Self { expanded: None }
    }
}

impl<K: PartialEq> Disclosure<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `id` if it is the open entry, otherwise make it the open one.
    pub fn toggle(&mut self, id: K) {
        if self.expanded.as_ref() == Some(&id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }

    /// Hover/focus entry: always opens `id`, replacing any other open entry.
    pub fn open(&mut self, id: K) {
        self.expanded = Some(id);
    }

    pub fn close(&mut self) {
        self.expanded = None;
    }

    /// Close `id` if it is the open entry; another open entry is left alone.
    pub fn collapse(&mut self, id: &K) {
        if self.is_expanded(id) {
            self.expanded = None;
        }
    }

    pub fn is_expanded(&self, id: &K) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&K> {
        self.expanded.as_ref()
    }

    /// Drop the open entry unless `keep` still accepts it.
    pub fn retain(&mut self, keep: impl FnOnce(&K) -> bool) {
        if let Some(id) = &self.expanded {
            if !keep(id) {
                self.expanded = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_with_nothing_expanded() {
        let d: Disclosure<&str> = Disclosure::new();
        assert_eq!(d.expanded(), None);
        assert!(!d.is_expanded(&"truck"));
    }

    #[test]
    fn second_course_replaces_first() {
        let mut d = Disclosure::new();
        d.toggle("truck");
        assert!(d.is_expanded(&"truck"));
        d.toggle("simulator");
        assert!(d.is_expanded(&"simulator"));
        assert!(!d.is_expanded(&"truck"));
        assert_eq!(d.expanded(), Some(&"simulator"));
    }

    #[test]
    fn toggling_open_entry_collapses_it() {
        let mut d = Disclosure::new();
        d.toggle(3usize);
        d.toggle(3usize);
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn open_is_not_a_toggle() {
        let mut d = Disclosure::new();
        d.open("Training");
        d.open("Training");
        assert!(d.is_expanded(&"Training"));
        d.close();
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn collapse_only_closes_its_own_entry() {
        let mut d = Disclosure::new();
        d.open("Training");
        d.collapse(&"About");
        assert!(d.is_expanded(&"Training"));
        d.collapse(&"Training");
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn retain_drops_entry_that_is_gone() {
        let mut d = Disclosure::new();
        d.toggle(7usize);
        d.retain(|id| *id < 5);
        assert_eq!(d.expanded(), None);

        d.toggle(2usize);
        d.retain(|id| *id < 5);
        assert_eq!(d.expanded(), Some(&2));
    }

    proptest! {
        #[test]
        fn double_toggle_restores_closed_or_same_entry(start_open in any::<bool>(), id in 0usize..8) {
            let mut d = Disclosure::new();
            if start_open {
                d.open(id);
            }
            let before = d.clone();
            d.toggle(id);
            d.toggle(id);
            prop_assert_eq!(d, before);
        }

        #[test]
        fn double_toggle_from_other_entry_ends_closed(other in 0usize..8, id in 0usize..8) {
            prop_assume!(other != id);
            let mut d = Disclosure::new();
            d.open(other);
            d.toggle(id);
            d.toggle(id);
            prop_assert_eq!(d.expanded(), None);
        }

        #[test]
        fn at_most_one_open_after_any_sequence(ids in proptest::collection::vec(0usize..6, 1..20)) {
            let mut d = Disclosure::new();
            for id in &ids {
                d.toggle(*id);
            }
            let open = (0..6).filter(|id| d.is_expanded(id)).count();
            prop_assert!(open <= 1);
        }

        #[test]
        fn distinct_toggles_leave_the_last(a in 0usize..10, b in 0usize..10) {
            prop_assume!(a != b);
            let mut d = Disclosure::new();
            d.toggle(a);
            d.toggle(b);
            prop_assert_eq!(d.expanded(), Some(&b));
        }
    }
}
