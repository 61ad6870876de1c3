use crate::services::task_store::TaskStore;
use feruca::Collator;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "A → Z",
            Self::Descending => "Z → A",
        }
    }
}

/// Title sort toggle.
///
/// Each activation reorders the whole store (hidden tasks included) and
/// flips direction. The first activation sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleSorter {
    ascending_next: bool,
}

impl Default for TitleSorter {
    fn default() -> Self {
        Self { ascending_next: true }
    }
}

impl TitleSorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_direction(&self) -> SortDirection {
        if self.ascending_next {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Text for the toggle control, naming what the next press will do.
    pub fn label(&self) -> &'static str {
        self.next_direction().label()
    }

    #[must_use]
    pub fn activate(&mut self, store: &TaskStore) -> TaskStore {
        let direction = self.next_direction();
        self.ascending_next = !self.ascending_next;
        sort_by_title(store, direction)
    }
}

/// Stable sort by Unicode collation (CLDR root order), so accented and
/// Cyrillic titles land where a dictionary would put them.
pub fn sort_by_title(store: &TaskStore, direction: SortDirection) -> TaskStore {
    let mut collator = Collator::default();
    match direction {
        SortDirection::Ascending => store.reordered(|a, b| collator.collate(&a.title, &b.title)),
        SortDirection::Descending => store.reordered(|a, b| collator.collate(&b.title, &a.title)),
    }
}

/// One-off collation of two strings; lowercase sorts first on a case-only tie.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
