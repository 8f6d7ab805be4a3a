/// Add-form contract: trims the submitted text and rejects blank input, so
/// that only non-empty text ever reaches [`crate::TaskStore::add`].
pub fn normalize_task_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_task_text("  Buy milk \n"), Some("Buy milk".to_string()));
        assert_eq!(normalize_task_text("a"), Some("a".to_string()));
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert_eq!(normalize_task_text(""), None);
        assert_eq!(normalize_task_text(" \t "), None);
    }
}
