//! Local reconciliation and filtering of the page-owned record collection.
//!
//! Each page fetches its collection once, derives a filtered subset for the
//! table, and mutates the collection only through these helpers after a
//! confirmed server-side change — never optimistically.

use contracts::Record;

/// Replace the record whose id matches `updated`, leaving every other record
/// untouched. A missing id is a no-op (the record was removed concurrently).
pub fn apply_update<T: Record>(records: &mut Vec<T>, updated: T) {
    if let Some(slot) = records.iter_mut().find(|r| r.id() == updated.id()) {
        *slot = updated;
    }
}

/// Drop every record whose id appears in `ids`.
pub fn remove_ids<T: Record>(records: &mut Vec<T>, ids: &[String]) {
    records.retain(|record| !ids.iter().any(|id| id == record.id()));
}

/// Apply a settled bulk-delete outcome. The batch is all-or-nothing: any
/// rejection leaves the collection exactly as it was. Returns whether the
/// removal happened.
pub fn reconcile_delete<T: Record, E>(
    records: &mut Vec<T>,
    ids: &[String],
    outcome: &Result<(), E>,
) -> bool {
    match outcome {
        Ok(()) => {
            remove_ids(records, ids);
            true
        }
        Err(_) => false,
    }
}

pub fn find_by_id<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

/// Case-insensitive substring search over the fields a page exposes.
/// An empty query matches everything.
pub fn matches_search(query: &str, haystacks: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|hay| hay.to_lowercase().contains(&needle))
}

/// Multi-select filter membership. An empty selection means "no filter".
pub fn matches_filter(value: &str, selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

/// Sorted distinct non-empty values of one field, for filter dropdowns.
pub fn distinct_options<T>(records: &[T], field: impl Fn(&T) -> &str) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .map(|record| field(record).trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::contacts::TravelAgent;

    fn agent(id: &str, name: &str, country: &str, city: &str) -> TravelAgent {
        serde_json::from_str(&format!(
            r#"{{"_id":"{id}","name":"{name}","email":"{name}@x.lk","phone":"071",
                 "country":"{country}","city":"{city}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_apply_update_touches_only_the_match() {
        let mut records = vec![agent("1", "Alpha", "LK", ""), agent("2", "Beta", "US", "")];
        let untouched = records[1].clone();

        let mut edited = records[0].clone();
        edited.name = "Alpha Tours".to_string();
        edited.updated_at = Some("2025-08-01T00:00:00Z".to_string());
        apply_update(&mut records, edited.clone());

        assert_eq!(records[0], edited);
        assert_eq!(records[1], untouched);
    }

    #[test]
    fn test_remove_ids_drops_exactly_the_deleted_set() {
        let mut records = vec![
            agent("1", "A", "", ""),
            agent("2", "B", "", ""),
            agent("3", "C", "", ""),
        ];
        remove_ids(&mut records, &["1".to_string(), "3".to_string()]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "2");
    }

    #[test]
    fn test_failed_batch_leaves_collection_unchanged() {
        let mut records = vec![
            agent("1", "A", "", ""),
            agent("2", "B", "", ""),
            agent("3", "C", "", ""),
        ];
        let before = records.clone();
        let outcome: Result<(), &str> = Err("HTTP 500");
        let removed = reconcile_delete(
            &mut records,
            &["1".to_string(), "2".to_string(), "3".to_string()],
            &outcome,
        );
        assert!(!removed);
        assert_eq!(records, before);
    }

    #[test]
    fn test_successful_batch_removes_subset() {
        let mut records = vec![
            agent("1", "A", "", ""),
            agent("2", "B", "", ""),
            agent("3", "C", "", ""),
        ];
        let outcome: Result<(), &str> = Ok(());
        assert!(reconcile_delete(
            &mut records,
            &["2".to_string()],
            &outcome
        ));
        assert_eq!(records.len(), 2);
        assert!(find_by_id(&records, "2").is_none());
    }

    #[test]
    fn test_search_and_filter_scenario() {
        let records = vec![agent("1", "Alpha", "LK", ""), agent("2", "Beta", "US", "")];

        let searched: Vec<_> = records
            .iter()
            .filter(|a| matches_search("alp", &[&a.name, &a.email]))
            .collect();
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].name, "Alpha");

        let filtered: Vec<_> = records
            .iter()
            .filter(|a| matches_filter(&a.country, &["US".to_string()]))
            .collect();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Beta");
    }

    #[test]
    fn test_empty_query_and_empty_filter_match_all() {
        assert!(matches_search("  ", &["anything"]));
        assert!(matches_filter("LK", &[]));
    }

    #[test]
    fn test_distinct_options_sorted_and_deduped() {
        let records = vec![
            agent("1", "A", "LK", "Colombo"),
            agent("2", "B", "US", "Kandy"),
            agent("3", "C", "LK", ""),
        ];
        assert_eq!(distinct_options(&records, |a| &a.country), vec!["LK", "US"]);
        assert_eq!(
            distinct_options(&records, |a| &a.city),
            vec!["Colombo", "Kandy"]
        );
    }
}
