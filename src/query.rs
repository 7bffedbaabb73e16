//! Candidate query derivation.
//!
//! The pure function mapping (master list, query state) to the displayed
//! sequence, plus the derived skill vocabulary for the filter options.

use crate::backend::CandidateRecord;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Sort directive for the candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the fetch-time order (newest submission first)
    #[default]
    Unsorted,
    /// Sort by full name A-Z
    NameAsc,
    /// Sort by full name Z-A
    NameDesc,
}

/// The mutable query controls driving derivation.
///
/// Defaults mean "show everything in fetch order"; reset returns all three
/// fields to their defaults in one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Free-text search term; empty means no text filtering
    pub search_term: String,
    /// Selected skill tag; None means no skill filtering
    pub selected_skill: Option<String>,
    /// Current sort directive
    pub sort_order: SortOrder,
}

/// Derive the displayed candidate sequence from the master list.
///
/// # Arguments
/// * `master` - Full fetched candidate list (never mutated)
/// * `query` - Current query state
///
/// # Returns
/// * `Vec<CandidateRecord>` - New sequence to display
///
/// # Details
/// Applies, in this fixed order:
/// 1. Text filter: case-insensitive substring match against the name, the
///    degree, or the space-joined skill list. Empty term is a no-op.
/// 2. Skill filter: case-sensitive exact membership test. Tags are chosen
///    from the vocabulary derived from the data, so stored casing is exact.
/// 3. Sort: by full name when a direction is set; `Unsorted` preserves the
///    filtered order, which follows the master list's order.
pub fn derive(master: &[CandidateRecord], query: &QueryState) -> Vec<CandidateRecord> {
    let mut results: Vec<CandidateRecord> = master.to_vec();

    if !query.search_term.is_empty() {
        let term = query.search_term.to_lowercase();
        results.retain(|candidate| {
            candidate.full_name.to_lowercase().contains(&term)
                || candidate.degree.to_lowercase().contains(&term)
                || candidate.skills.join(" ").to_lowercase().contains(&term)
        });
    }

    if let Some(ref skill) = query.selected_skill {
        results.retain(|candidate| candidate.skills.iter().any(|s| s == skill));
    }

    match query.sort_order {
        SortOrder::Unsorted => {}
        SortOrder::NameAsc => {
            results.sort_by(|a, b| compare_names(&a.full_name, &b.full_name));
        }
        SortOrder::NameDesc => {
            results.sort_by(|a, b| compare_names(&b.full_name, &a.full_name));
        }
    }

    results
}

/// Compare two names case-insensitively, tie-breaking on the raw strings.
///
/// Stands in for locale collation: names are compared by their Unicode
/// lowercased forms so "al" and "Al" order together.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Compute the selectable skill vocabulary from the master list.
///
/// # Returns
/// * `Vec<String>` - Deduplicated union of all skill tags, sorted A-Z
///
/// # Details
/// Always reflects the full unfiltered population; active filters never
/// shrink the option set. Recomputed only when the master list changes.
pub fn skill_vocabulary(master: &[CandidateRecord]) -> Vec<String> {
    let unique: BTreeSet<&String> = master.iter().flat_map(|c| c.skills.iter()).collect();
    unique.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn candidate(name: &str, degree: &str, skills: &[&str], posted_secs: i64) -> CandidateRecord {
        CandidateRecord {
            id: format!("id-{}", name),
            full_name: name.to_string(),
            address: "Colombo".to_string(),
            degree: degree.to_string(),
            phone_no: "0771234567".to_string(),
            linkedin: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            posted_at: Utc.timestamp_opt(posted_secs, 0).unwrap(),
        }
    }

    /// Master list as it looks after fetch: newest submission first.
    fn master() -> Vec<CandidateRecord> {
        vec![
            candidate("Al", "BEng in Software Engineering", &["Go"], 200),
            candidate("Bea", "BSc in Computer Science", &["SQL"], 100),
        ]
    }

    #[test]
    fn test_default_query_is_identity() {
        let list = master();
        let derived = derive(&list, &QueryState::default());
        assert_eq!(derived, list);
    }

    #[test]
    fn test_text_filter_matches_name_degree_and_skills() {
        let list = master();

        let by_name = derive(
            &list,
            &QueryState {
                search_term: "bea".to_string(),
                ..QueryState::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].full_name, "Bea");

        let by_degree = derive(
            &list,
            &QueryState {
                search_term: "software".to_string(),
                ..QueryState::default()
            },
        );
        assert_eq!(by_degree.len(), 1);
        assert_eq!(by_degree[0].full_name, "Al");
    }

    #[test]
    fn test_text_search_is_case_insensitive_over_skills() {
        // "sql" must match a skill stored as "SQL"
        let list = master();
        let derived = derive(
            &list,
            &QueryState {
                search_term: "sql".to_string(),
                ..QueryState::default()
            },
        );
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].full_name, "Bea");
    }

    #[test]
    fn test_skill_filter_exact_match() {
        let list = master();
        let derived = derive(
            &list,
            &QueryState {
                selected_skill: Some("SQL".to_string()),
                ..QueryState::default()
            },
        );
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].full_name, "Bea");
    }

    #[test]
    fn test_skill_filter_is_case_sensitive() {
        // Observed behavior of the platform: the equality filter does not
        // fold case, unlike the text search.
        let list = master();
        let derived = derive(
            &list,
            &QueryState {
                selected_skill: Some("sql".to_string()),
                ..QueryState::default()
            },
        );
        assert!(derived.is_empty());
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let list = master();

        let asc = derive(
            &list,
            &QueryState {
                sort_order: SortOrder::NameAsc,
                ..QueryState::default()
            },
        );
        let names: Vec<&str> = asc.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, ["Al", "Bea"]);

        let desc = derive(
            &list,
            &QueryState {
                sort_order: SortOrder::NameDesc,
                ..QueryState::default()
            },
        );
        let names: Vec<&str> = desc.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, ["Bea", "Al"]);
    }

    #[test]
    fn test_name_sort_folds_case() {
        let list = vec![
            candidate("zane", "BSc", &[], 300),
            candidate("Ada", "BSc", &[], 200),
            candidate("bob", "BSc", &[], 100),
        ];
        let asc = derive(
            &list,
            &QueryState {
                sort_order: SortOrder::NameAsc,
                ..QueryState::default()
            },
        );
        let names: Vec<&str> = asc.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, ["Ada", "bob", "zane"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let list = master();
        let derived = derive(
            &list,
            &QueryState {
                search_term: "zz".to_string(),
                ..QueryState::default()
            },
        );
        assert!(derived.is_empty());
    }

    #[test]
    fn test_derivation_is_subsequence_of_master() {
        let list = master();
        let query = QueryState {
            search_term: "b".to_string(),
            ..QueryState::default()
        };
        let derived = derive(&list, &query);
        for record in &derived {
            assert_eq!(list.iter().filter(|c| c.id == record.id).count(), 1);
        }
        assert!(derived.len() <= list.len());
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let list = master();
        let query = QueryState {
            search_term: "b".to_string(),
            selected_skill: Some("SQL".to_string()),
            sort_order: SortOrder::NameAsc,
        };
        let once = derive(&list, &query);
        let twice = derive(&once, &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_vocabulary_sorted_and_deduplicated() {
        let list = vec![
            candidate("Al", "BSc", &["Go", "SQL"], 300),
            candidate("Bea", "BSc", &["SQL"], 200),
            candidate("Cy", "BSc", &[], 100),
        ];
        assert_eq!(skill_vocabulary(&list), ["Go", "SQL"]);
    }

    #[test]
    fn test_vocabulary_independent_of_filters() {
        // The vocabulary is a function of the master list alone; a query
        // that filters everything out must not change it.
        let list = master();
        let before = skill_vocabulary(&list);
        let _ = derive(
            &list,
            &QueryState {
                search_term: "zz".to_string(),
                ..QueryState::default()
            },
        );
        assert_eq!(skill_vocabulary(&list), before);
        assert_eq!(before, ["Go", "SQL"]);
    }

    #[test]
    fn test_empty_master_list() {
        let derived = derive(&[], &QueryState::default());
        assert!(derived.is_empty());
        assert!(skill_vocabulary(&[]).is_empty());
    }

    #[test]
    fn test_scenario_filter_then_sort_then_reset() {
        // L = [Al (Go, newer), Bea (SQL, older)] in fetch order.
        let list = master();

        let sql_only = derive(
            &list,
            &QueryState {
                selected_skill: Some("SQL".to_string()),
                ..QueryState::default()
            },
        );
        let names: Vec<&str> = sql_only.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, ["Bea"]);

        let sorted = derive(
            &list,
            &QueryState {
                sort_order: SortOrder::NameAsc,
                ..QueryState::default()
            },
        );
        let names: Vec<&str> = sorted.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, ["Al", "Bea"]);

        // Reset: defaults restore the fetch-time order.
        let reset = derive(&list, &QueryState::default());
        let names: Vec<&str> = reset.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, ["Al", "Bea"]);
    }
}
