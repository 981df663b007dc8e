use crate::models::CourseRecord;

/// Upper bound on courses injected into one prompt
pub const MAX_MATCHES: usize = 3;

/// Find courses mentioned in the query.
///
/// A course matches when its name or any of its tags appears as a plain
/// substring of the lowercased query. Hits keep catalog order and stop at
/// [`MAX_MATCHES`]. Empty names and empty tags never match; anything else,
/// padding included, is matched literally.
pub fn find_relevant_courses<'a>(query: &str, courses: &'a [CourseRecord]) -> Vec<&'a CourseRecord> {
    let query_lower = query.to_lowercase();

    courses
        .iter()
        .filter(|course| mentions(&query_lower, course))
        .take(MAX_MATCHES)
        .collect()
}

fn mentions(query_lower: &str, course: &CourseRecord) -> bool {
    let contains =
        |needle: &str| !needle.is_empty() && query_lower.contains(needle.to_lowercase().as_str());

    contains(course.name()) || course.tags.iter().any(|tag| contains(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, tags: &[&str]) -> CourseRecord {
        CourseRecord {
            name: Some(name.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let courses = vec![course("Data Science", &[]), course("Web Development", &[])];
        let hits = find_relevant_courses("What is the fee for DATA SCIENCE?", &courses);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Data Science");
    }

    #[test]
    fn test_matches_by_tag() {
        let courses = vec![course("Full Stack", &["React", "node"])];
        let hits = find_relevant_courses("do you teach react?", &courses);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let courses = vec![course("Data Science", &["ml"]), course("Tally", &["accounts"])];
        assert!(find_relevant_courses("hello there", &courses).is_empty());
    }

    #[test]
    fn test_caps_at_three_in_catalog_order() {
        let courses = vec![
            course("A", &["python"]),
            course("B", &["python"]),
            course("Unrelated", &["java"]),
            course("C", &["python"]),
            course("D", &["python"]),
        ];

        let hits = find_relevant_courses("python", &courses);
        let names: Vec<&str> = hits.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_name_still_checks_tags() {
        let courses = vec![course("", &["excel"])];
        assert_eq!(find_relevant_courses("advanced excel batch", &courses).len(), 1);
        assert!(find_relevant_courses("anything else", &courses).is_empty());
    }

    #[test]
    fn test_empty_tag_never_matches() {
        let courses = vec![course("Tally", &[""])];
        assert!(find_relevant_courses("what courses do you have", &courses).is_empty());
    }

    #[test]
    fn test_padded_tag_matches_literally() {
        let courses = vec![course("Java", &[" ml "])];
        assert!(find_relevant_courses("learn html", &courses).is_empty());
        assert_eq!(find_relevant_courses("is ml included", &courses).len(), 1);
    }

    #[test]
    fn test_substring_not_tokenized() {
        let courses = vec![course("AI", &[])];
        // "ai" sits inside "details"
        assert_eq!(find_relevant_courses("more details", &courses).len(), 1);
    }
}
