use serde::{Deserialize, Serialize};

/// Sentinel facet value meaning "no constraint for this dimension".
pub const ALL: &str = "all";

/// One categorical filter dimension (status, team, sport, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    pub selected: String,
}

impl Facet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            selected: ALL.to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.selected != ALL
    }
}

/// Explicit, serializable view state for one management list screen.
///
/// Replaces the ad-hoc component-local search/filter variables of the
/// original screens so the predicate is testable without a rendering
/// harness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFilter {
    pub search: String,
    pub facets: Vec<Facet>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_facet(mut self, name: &str) -> Self {
        self.facets.push(Facet::new(name));
        self
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// Select a value for a facet, adding the dimension if it is new.
    pub fn set_facet(&mut self, name: &str, value: &str) {
        match self.facets.iter_mut().find(|f| f.name == name) {
            Some(f) => f.selected = value.to_string(),
            None => self.facets.push(Facet {
                name: name.to_string(),
                selected: value.to_string(),
            }),
        }
    }

    pub fn facet(&self, name: &str) -> Option<&str> {
        self.facets
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.selected.as_str())
    }

    /// Number of active constraints, for the filter badge.
    pub fn active_count(&self) -> usize {
        let facets = self.facets.iter().filter(|f| f.is_active()).count();
        if self.search.trim().is_empty() {
            facets
        } else {
            facets + 1
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }
}

/// A record that can be matched against a `ListFilter`.
pub trait Searchable {
    /// Candidate fields for the text match, in screen order. Absent
    /// (null) fields are `None` and never match.
    fn search_fields(&self) -> Vec<Option<String>>;

    /// Value of a categorical dimension, `None` when the record has no
    /// such dimension.
    fn facet_value(&self, facet: &str) -> Option<String>;

    /// Case-insensitive substring match, OR across candidate fields.
    /// An empty search term matches every record.
    fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| match field {
                Some(value) => value.to_lowercase().contains(&needle),
                None => false,
            })
    }

    /// AND across facet dimensions; the `"all"` sentinel passes every
    /// record, a record lacking a constrained dimension fails it.
    fn matches_facets(&self, facets: &[Facet]) -> bool {
        facets.iter().all(|facet| {
            if !facet.is_active() {
                return true;
            }
            self.facet_value(&facet.name)
                .is_some_and(|value| value == facet.selected)
        })
    }

    fn matches(&self, filter: &ListFilter) -> bool {
        self.matches_search(&filter.search) && self.matches_facets(&filter.facets)
    }
}

/// Narrow a collection for rendering. Insertion order is preserved; no
/// pagination, no sorting.
pub fn filter_records<T: Searchable + Clone>(items: &[T], filter: &ListFilter) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches(filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        nickname: Option<String>,
        number: Option<i32>,
        status: &'static str,
        team: Option<&'static str>,
    }

    impl Row {
        fn new(name: &str, status: &'static str) -> Self {
            Self {
                name: name.to_string(),
                nickname: None,
                number: None,
                status,
                team: None,
            }
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<Option<String>> {
            vec![
                Some(self.name.clone()),
                self.nickname.clone(),
                self.number.map(|n| n.to_string()),
            ]
        }

        fn facet_value(&self, facet: &str) -> Option<String> {
            match facet {
                "status" => Some(self.status.to_string()),
                "team" => self.team.map(|t| t.to_string()),
                _ => None,
            }
        }
    }

    fn filter_with(search: &str, status: &str) -> ListFilter {
        let mut f = ListFilter::new().with_facet("status");
        f.set_search(search);
        f.set_facet("status", status);
        f
    }

    #[test]
    fn inclusion_is_text_or_across_fields_and_facet_and() {
        let mut row = Row::new("Alice Field", "active");
        row.nickname = Some("Ace".to_string());

        // matches via second field only
        assert!(row.matches(&filter_with("ace", "active")));
        // text matches but facet does not
        assert!(!row.matches(&filter_with("ace", "inactive")));
        // facet matches but text does not
        assert!(!row.matches(&filter_with("zzz", "active")));
    }

    #[test]
    fn empty_search_reduces_to_facets_only() {
        let row = Row::new("Bob", "pending");
        assert!(row.matches(&filter_with("", "pending")));
        assert!(!row.matches(&filter_with("", "active")));
        assert!(row.matches(&filter_with("", ALL)));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let row = Row::new("Main Soccer Field", "active");
        assert!(row.matches_search("soccer"));
        assert!(row.matches_search("SOCCER"));
        assert!(row.matches_search("occ"));
        assert!(!row.matches_search("soccerx"));
    }

    #[test]
    fn numeric_fields_match_as_text() {
        let mut row = Row::new("Casey", "active");
        row.number = Some(14);
        assert!(row.matches_search("14"));
        assert!(row.matches_search("1"));
        assert!(row.matches_search("4"));
        assert!(!row.matches_search("41"));
    }

    #[test]
    fn absent_fields_never_match_and_never_panic() {
        let row = Row::new("Dana", "active");
        assert!(!row.matches_search("ace"));
        // nickname and number are None; only the name is considered
        assert!(row.matches_search("dana"));
    }

    #[test]
    fn record_without_constrained_dimension_is_excluded() {
        let row = Row::new("Eve", "active");
        let mut f = ListFilter::new();
        f.set_facet("team", "u16");
        assert!(!row.matches(&f));
        f.set_facet("team", ALL);
        assert!(row.matches(&f));
    }

    #[test]
    fn filter_records_preserves_order() {
        let rows = vec![
            Row::new("a one", "active"),
            Row::new("b two", "inactive"),
            Row::new("a three", "active"),
        ];
        let mut f = ListFilter::new();
        f.set_search("a");
        let visible = filter_records(&rows, &f);
        let names: Vec<&str> = visible.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a one", "a three"]);
    }

    #[test]
    fn active_count_counts_search_and_non_all_facets() {
        let mut f = ListFilter::new().with_facet("status").with_facet("team");
        assert_eq!(f.active_count(), 0);
        assert!(f.is_unconstrained());
        f.set_facet("status", "paid");
        assert_eq!(f.active_count(), 1);
        f.set_search("smith");
        assert_eq!(f.active_count(), 2);
        f.set_search("   ");
        assert_eq!(f.active_count(), 1);
    }

    #[test]
    fn view_state_round_trips_through_json() {
        let mut f = ListFilter::new().with_facet("status");
        f.set_search("field");
        f.set_facet("status", "available");
        let json = serde_json::to_string(&f).unwrap();
        let back: ListFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }
}
