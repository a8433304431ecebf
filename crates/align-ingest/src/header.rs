//! Header row naming shared by the workbook and CSV readers.

use std::collections::HashSet;

/// Builds unique column names from a header row.
///
/// Blank header cells become `Unnamed: <index>`. A repeated name gets a
/// `.1`, `.2`, ... suffix, skipping suffixes that are already taken.
pub fn unique_column_names(raw: &[Option<String>]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut names = Vec::with_capacity(raw.len());

    for (idx, value) in raw.iter().enumerate() {
        let base = match value {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Unnamed: {idx}"),
        };

        let mut candidate = base.clone();
        let mut suffix = 1usize;
        while used.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }

        used.insert(candidate.clone());
        names.push(candidate);
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn test_names_pass_through() {
        let names = unique_column_names(&header(&[Some("FN"), Some("Phone")]));
        assert_eq!(names, vec!["FN", "Phone"]);
    }

    #[test]
    fn test_blank_headers_are_unnamed() {
        let names = unique_column_names(&header(&[Some("FN"), None, Some("")]));
        assert_eq!(names, vec!["FN", "Unnamed: 1", "Unnamed: 2"]);
    }

    #[test]
    fn test_duplicates_get_suffixes() {
        let names = unique_column_names(&header(&[Some("A"), Some("A"), Some("A.1"), Some("A")]));
        assert_eq!(names, vec!["A", "A.1", "A.1.1", "A.2"]);
    }

    #[test]
    fn test_whitespace_is_significant() {
        let names = unique_column_names(&header(&[Some("Name"), Some("Name ")]));
        assert_eq!(names, vec!["Name", "Name "]);
    }
}
