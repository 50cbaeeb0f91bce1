//! Required-field checking shared by every entity form.
//!
//! Pages assemble the `(name, value)` pairs — including conditionally
//! required fields — and abort the whole submit on the first failure with a
//! single warning toast, before any network call.

/// Names of required fields whose value is empty after trimming.
pub fn missing_required<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

pub fn all_present(fields: &[(&str, &str)]) -> bool {
    missing_required(fields).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_blank_counts_as_missing() {
        let missing = missing_required(&[("name", "Island Tours"), ("email", "   "), ("phone", "")]);
        assert_eq!(missing, vec!["email", "phone"]);
    }

    #[test]
    fn test_all_present() {
        assert!(all_present(&[("name", "A"), ("phone", "071")]));
        assert!(!all_present(&[("name", "A"), ("phone", "\t")]));
    }

    #[test]
    fn test_conditional_field_added_by_caller() {
        // "Assigned To" becomes required only when the item is in use; the
        // page appends it to the list before checking.
        let status = "In Use";
        let assigned_to = "";
        let mut fields = vec![("name", "Projector"), ("status", status)];
        if status == contracts::domain::inventory::STATUS_IN_USE {
            fields.push(("assignedTo", assigned_to));
        }
        assert_eq!(missing_required(&fields), vec!["assignedTo"]);
    }
}
