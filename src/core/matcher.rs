use crate::core::{
    distance::{dimension_contributions, weighted_distance},
    filters::filter_by_subject,
    scoring::{compatibility_score, why_best_worst},
};
use crate::models::{MatchResult, Persona, Teacher};

/// Score a single teacher against a student persona
pub fn score_teacher(teacher: &Teacher, student: &Persona) -> MatchResult {
    let distance = weighted_distance(student, &teacher.persona);
    let contributions = dimension_contributions(student, &teacher.persona);

    MatchResult {
        teacher_id: teacher.teacher_id.clone(),
        name: teacher.name.clone(),
        subject: teacher.subject.clone(),
        archetype: teacher.archetype.clone(),
        tagline: teacher.tagline.clone(),
        summary: teacher.summary.clone(),
        compatibility_score: compatibility_score(distance),
        why: why_best_worst(&contributions),
    }
}

/// Rank teachers by compatibility with a student
///
/// # Pipeline
/// 1. Subject filter (trimmed, case-sensitive), skipped when `subject` is `None`
/// 2. Distance, score and best/worst explanation per teacher
/// 3. Stable sort by score, highest first; exact ties keep corpus order
///
/// Never fails: partial personas read missing dimensions as 0.5 and an empty
/// corpus (or a subject nobody teaches) gives an empty list.
pub fn rank_teachers(
    teachers: &[Teacher],
    student: &Persona,
    subject: Option<&str>,
) -> Vec<MatchResult> {
    let mut ranked: Vec<MatchResult> = filter_by_subject(teachers, subject)
        .map(|teacher| score_teacher(teacher, student))
        .collect();

    ranked.sort_by(|a, b| b.compatibility_score.total_cmp(&a.compatibility_score));

    ranked
}
