//! Role and free-text filtering over the hero collection.
//!
//! Role matching is a substring test against the description text rather
//! than a dedicated field: a hero whose description mentions "tank" is shown
//! under the tank button.

use std::fmt;

use zenith_types::{HeroRecord, ROLE_ALL};

/// Role selector state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Role {
    /// Sentinel: no role filtering
    #[default]
    All,
    /// Lowercased role identifier
    Named(String),
}

impl Role {
    /// Parse a role identifier as carried by a role button. Only the exact
    /// `"all"` id is the sentinel; anything else is matched as given.
    pub fn parse(id: &str) -> Self {
        if id == ROLE_ALL {
            Self::All
        } else {
            Self::Named(id.to_lowercase())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ROLE_ALL,
            Self::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether `hero` passes this role filter.
    pub fn matches(&self, hero: &HeroRecord) -> bool {
        match self {
            Self::All => true,
            Self::Named(role) => hero
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(role.as_str())),
        }
    }
}

impl From<&str> for Role {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize raw search box text: trimmed, lowercased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `hero` matches an already normalized query.
fn matches_query(hero: &HeroRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    hero.name.to_lowercase().contains(query)
        || hero
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query))
}

/// Indices into `all` of the records passing both filters, in source order.
pub fn filter_indices(all: &[HeroRecord], role: &Role, query: &str) -> Vec<usize> {
    let query = normalize_query(query);
    all.iter()
        .enumerate()
        .filter(|(_, hero)| role.matches(hero) && matches_query(hero, &query))
        .map(|(idx, _)| idx)
        .collect()
}

/// Records of `all` passing both the role and the query filter.
///
/// The output is a subsequence of the input; nothing is reordered and the
/// input is left untouched.
pub fn filter(all: &[HeroRecord], role: &Role, query: &str) -> Vec<HeroRecord> {
    filter_indices(all, role, query)
        .into_iter()
        .map(|idx| all[idx].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(name: &str, description: Option<&str>) -> HeroRecord {
        HeroRecord {
            description: description.map(String::from),
            ..HeroRecord::named(name)
        }
    }

    fn roster() -> Vec<HeroRecord> {
        vec![
            hero("Tigreal", Some("Tank with crowd control")),
            hero("Hanabi", Some("Marksman, ranged")),
            hero("Johnson", Some("TANK and support")),
            hero("Anna", None),
            hero("Joannah", Some("Fighter")),
            hero("Hylos", Some("Tank, lead by Ann")),
            hero("Lunox", Some("Mage")),
        ]
    }

    fn names(list: &[HeroRecord]) -> Vec<&str> {
        list.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("all"), Role::All);
        assert_eq!(Role::parse("ALL"), Role::Named("all".to_string()));
        assert_eq!(Role::parse(""), Role::Named(String::new()));
        assert_eq!(Role::parse("Tank"), Role::Named("tank".to_string()));
        assert_eq!(Role::parse("Mage").to_string(), "mage");
    }

    #[test]
    fn test_only_exact_all_skips_role_filter() {
        let all = vec![hero("A", Some("Tank")), hero("NoDesc", None)];
        assert_eq!(names(&filter(&all, &Role::parse(""), "")), vec!["A"]);
        assert_eq!(names(&filter(&all, &Role::parse("ALL"), "")), Vec::<&str>::new());
        assert_eq!(names(&filter(&all, &Role::parse("all"), "")), vec!["A", "NoDesc"]);
    }

    #[test]
    fn test_all_empty_is_identity() {
        let all = roster();
        assert_eq!(filter(&all, &Role::All, ""), all);
        assert_eq!(filter(&all, &Role::All, "   "), all);
    }

    #[test]
    fn test_role_is_case_insensitive_substring() {
        let all = roster();
        let tanks = filter(&all, &Role::parse("tank"), "");
        assert_eq!(names(&tanks), vec!["Tigreal", "Johnson", "Hylos"]);
    }

    #[test]
    fn test_role_excludes_missing_description() {
        let all = roster();
        let result = filter(&all, &Role::parse("a"), "");
        assert!(!names(&result).contains(&"Anna"));
    }

    #[test]
    fn test_query_matches_name_or_description() {
        let all = roster();
        let result = filter(&all, &Role::All, "  ANN ");
        // Anna and Joannah by name, Hylos by description
        assert_eq!(names(&result), vec!["Anna", "Joannah", "Hylos"]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let all = roster();
        let both = filter(&all, &Role::parse("tank"), "ann");
        let by_role = filter(&all, &Role::parse("tank"), "");
        let by_query = filter(&all, &Role::All, "ann");
        let intersection: Vec<_> = by_role
            .iter()
            .filter(|h| by_query.contains(h))
            .cloned()
            .collect();
        assert_eq!(both, intersection);
        assert_eq!(names(&both), vec!["Hylos"]);
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        let all = roster();
        for role in ["all", "tank", "mage", "fighter", "support", "x"] {
            for query in ["", "a", "an", "o", "zzz"] {
                let idx = filter_indices(&all, &Role::parse(role), query);
                assert!(idx.windows(2).all(|w| w[0] < w[1]), "{role}/{query}");
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent_and_pure() {
        let all = roster();
        let before = all.clone();
        let a = filter(&all, &Role::parse("tank"), "o");
        let b = filter(&all, &Role::parse("tank"), "o");
        assert_eq!(a, b);
        assert_eq!(all, before);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter(&roster(), &Role::parse("assassin"), "").is_empty());
    }
}
