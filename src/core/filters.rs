use crate::models::Teacher;

/// Check if a teacher teaches the requested subject
///
/// Both sides are trimmed of surrounding whitespace; the comparison is
/// otherwise exact and case-sensitive.
#[inline]
pub fn matches_subject(teacher: &Teacher, subject: &str) -> bool {
    teacher.subject.trim() == subject.trim()
}

/// Restrict a corpus to one subject, or pass everything through when no
/// subject is given. Corpus order is preserved.
pub fn filter_by_subject<'a>(
    teachers: &'a [Teacher],
    subject: Option<&'a str>,
) -> impl Iterator<Item = &'a Teacher> + 'a {
    teachers
        .iter()
        .filter(move |teacher| subject.map_or(true, |s| matches_subject(teacher, s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Persona;

    fn create_teacher(id: &str, subject: &str) -> Teacher {
        Teacher {
            teacher_id: id.to_string(),
            name: format!("Teacher {}", id),
            subject: subject.to_string(),
            archetype: String::new(),
            tagline: String::new(),
            summary: String::new(),
            persona: Persona::new(),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_subject_trimmed_both_sides() {
        let teacher = create_teacher("1", "  Biology ");

        assert!(matches_subject(&teacher, "Biology"));
        assert!(matches_subject(&teacher, "\tBiology\n"));
    }

    #[test]
    fn test_subject_case_sensitive() {
        let teacher = create_teacher("1", "Biology");

        assert!(!matches_subject(&teacher, "biology"));
        assert!(!matches_subject(&teacher, "Bio"));
    }

    #[test]
    fn test_filter_by_subject() {
        let teachers = vec![
            create_teacher("1", "Biology"),
            create_teacher("2", "Physics"),
            create_teacher("3", "Biology "),
        ];

        let ids: Vec<&str> = filter_by_subject(&teachers, Some("Biology"))
            .map(|t| t.teacher_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);

        assert_eq!(filter_by_subject(&teachers, None).count(), 3);
        assert_eq!(filter_by_subject(&teachers, Some("Chemistry")).count(), 0);
    }
}
