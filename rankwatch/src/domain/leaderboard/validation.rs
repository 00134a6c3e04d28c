use super::error::LeaderboardError;
use super::types::LeaderboardEntry;
use std::collections::HashSet;

pub fn validate_entries(entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
    let mut seen = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if entry.user_id.as_str().trim().is_empty() {
            return Err(LeaderboardError::malformed(format!(
                "Entry at index {index} has an empty user id"
            )));
        }
        if !seen.insert(&entry.user_id) {
            return Err(LeaderboardError::DuplicateEntry(entry.user_id.clone()));
        }
    }

    if let Some(index) = entries
        .windows(2)
        .position(|pair| pair[0].score < pair[1].score)
    {
        return Err(LeaderboardError::Unsorted { index: index + 1 });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, score: i64) -> LeaderboardEntry {
        LeaderboardEntry::new(id, id, score)
    }

    #[test]
    fn test_validate_entries_valid() {
        assert!(validate_entries(&[]).is_ok());
        assert!(validate_entries(&[entry("a", 10)]).is_ok());
        assert!(validate_entries(&[entry("a", 10), entry("b", 5), entry("c", 1)]).is_ok());
    }

    #[test]
    fn test_validate_entries_ties_allowed() {
        assert!(validate_entries(&[entry("a", 10), entry("b", 10)]).is_ok());
    }

    #[test]
    fn test_validate_entries_unsorted() {
        let result = validate_entries(&[entry("a", 10), entry("b", 5), entry("c", 7)]);
        assert_eq!(result, Err(LeaderboardError::Unsorted { index: 2 }));
    }

    #[test]
    fn test_validate_entries_duplicate() {
        let result = validate_entries(&[entry("a", 10), entry("a", 5)]);
        assert_eq!(result, Err(LeaderboardError::DuplicateEntry("a".into())));
    }

    #[test]
    fn test_validate_entries_empty_id() {
        assert!(validate_entries(&[entry("  ", 10)]).is_err());
    }
}
