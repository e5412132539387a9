use crate::error::AnalysisError;

/// Returns the first entry of `candidates` that is an exact, case-sensitive
/// match for one of `headers`. Priority follows candidate order, not the
/// order of columns in the file.
pub fn locate_text_column<'a, S: AsRef<str>>(
    headers: &[S],
    candidates: &'a [String],
) -> Result<&'a str, AnalysisError> {
    candidates
        .iter()
        .find(|candidate| headers.iter().any(|h| h.as_ref() == candidate.as_str()))
        .map(String::as_str)
        .ok_or(AnalysisError::MissingTextColumn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        vec!["label".to_string(), "text".to_string()]
    }

    #[test]
    fn test_finds_label_column() {
        let candidates = defaults();
        assert_eq!(
            locate_text_column(&["id", "label", "score"], &candidates),
            Ok("label")
        );
    }

    #[test]
    fn test_label_beats_text_regardless_of_position() {
        let candidates = defaults();
        assert_eq!(
            locate_text_column(&["text", "id", "label"], &candidates),
            Ok("label")
        );
    }

    #[test]
    fn test_falls_back_to_text() {
        let candidates = defaults();
        assert_eq!(locate_text_column(&["id", "text"], &candidates), Ok("text"));
    }

    #[test]
    fn test_missing_column() {
        let candidates = defaults();
        assert_eq!(
            locate_text_column(&["id", "comment"], &candidates),
            Err(AnalysisError::MissingTextColumn)
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let candidates = defaults();
        assert_eq!(
            locate_text_column(&["Label", "TEXT"], &candidates),
            Err(AnalysisError::MissingTextColumn)
        );
    }

    #[test]
    fn test_missing_column_message() {
        assert_eq!(
            AnalysisError::MissingTextColumn.to_string(),
            "Error: CSV file does not contain a recognized text column."
        );
    }
}
