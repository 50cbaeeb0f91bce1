//! Pure pagination and selection arithmetic behind the data table.

pub fn page_count(total: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 0;
    }
    total.div_ceil(rows_per_page)
}

/// Clamp a requested page into range after the row set shrinks.
pub fn clamp_page(page: usize, total: usize, rows_per_page: usize) -> usize {
    page.min(page_count(total, rows_per_page).saturating_sub(1))
}

/// Rows visible on `page`: `rows[page*per .. page*per+per]`, clamped.
pub fn page_slice<T: Clone>(rows: &[T], page: usize, rows_per_page: usize) -> Vec<T> {
    let start = page.saturating_mul(rows_per_page).min(rows.len());
    let end = start.saturating_add(rows_per_page).min(rows.len());
    rows[start..end].to_vec()
}

/// Toggle one id's membership in the selection, preserving order of the rest.
pub fn toggle_id(selected: &mut Vec<String>, id: &str) {
    if let Some(pos) = selected.iter().position(|s| s == id) {
        selected.remove(pos);
    } else {
        selected.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("r{i}")).collect()
    }

    #[test]
    fn test_pages_union_reconstructs_rows() {
        let all = rows(23);
        for per in [1, 5, 10, 25] {
            let mut rebuilt = Vec::new();
            for page in 0..page_count(all.len(), per) {
                let slice = page_slice(&all, page, per);
                assert!(slice.len() <= per);
                rebuilt.extend(slice);
            }
            assert_eq!(rebuilt, all);
        }
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let all = rows(7);
        assert!(page_slice(&all, 3, 5).is_empty());
    }

    #[test]
    fn test_clamp_page_after_shrink() {
        // 23 rows at 10/page put the user on page 2; deleting down to 7 rows
        // must land on the last remaining page, not an empty one.
        assert_eq!(clamp_page(2, 7, 10), 0);
        assert_eq!(clamp_page(2, 23, 10), 2);
        assert_eq!(clamp_page(0, 0, 10), 0);
    }

    #[test]
    fn test_select_all_scope_is_current_page_only() {
        let all = rows(12);
        let visible = page_slice(&all, 1, 5);
        assert_eq!(visible, vec!["r5", "r6", "r7", "r8", "r9"]);
        // "Select all" adopts exactly the visible ids; nothing from other
        // pages sneaks in.
        let selected: Vec<String> = visible.clone();
        assert!(selected.iter().all(|id| visible.contains(id)));
        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn test_toggle_id_round_trip() {
        let mut selected = vec!["a".to_string(), "b".to_string()];
        toggle_id(&mut selected, "c");
        assert_eq!(selected, vec!["a", "b", "c"]);
        toggle_id(&mut selected, "a");
        assert_eq!(selected, vec!["b", "c"]);
    }
}
