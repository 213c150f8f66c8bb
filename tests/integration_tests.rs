// Integration tests for Unitinder Algo

use unitinder_algo::core::{rank_teachers, Dimension};
use unitinder_algo::models::{Persona, Teacher};
use unitinder_algo::services::{parse_teachers, CorpusStore};

const SAMPLE_CORPUS: &str = include_str!("../data/teachers.json");

fn create_teacher(id: &str, subject: &str, persona: Persona) -> Teacher {
    Teacher {
        teacher_id: id.to_string(),
        name: format!("Teacher {}", id),
        subject: subject.to_string(),
        archetype: "The Coach".to_string(),
        tagline: "Practice makes progress".to_string(),
        summary: format!("Teaches {}", subject),
        persona,
        extra: Default::default(),
    }
}

fn create_corpus() -> Vec<Teacher> {
    vec![
        create_teacher("1", "Biology", Persona::uniform(0.3)),
        create_teacher("2", "Physics", Persona::uniform(0.9)),
        create_teacher("3", "Biology", Persona::uniform(0.5).with(Dimension::Pace, 0.9)),
        create_teacher("4", " Biology ", Persona::uniform(0.1)),
        create_teacher("5", "Mathematics", Persona::new()),
        create_teacher("6", "Physics", Persona::uniform(0.45)),
    ]
}

#[test]
fn test_integration_end_to_end_ranking() {
    let student = Persona::uniform(0.4).with(Dimension::Pace, 0.8);

    let ranked = rank_teachers(&create_corpus(), &student, None);

    assert_eq!(ranked.len(), 6);

    // Sorted by score, highest first
    for i in 1..ranked.len() {
        assert!(
            ranked[i - 1].compatibility_score >= ranked[i].compatibility_score,
            "Matches not sorted by score"
        );
    }

    for m in &ranked {
        assert!(
            m.compatibility_score > 0.0 && m.compatibility_score <= 100.0,
            "Score {} is out of range (0, 100]",
            m.compatibility_score
        );
        for dim in m.why.best {
            assert!(!m.why.worst.contains(&dim));
        }
    }
}

#[test]
fn test_scenario_pace_versus_interactivity() {
    let student = Persona::uniform(0.5).with(Dimension::Pace, 0.0);
    let teachers = vec![
        create_teacher("A", "Biology", Persona::uniform(0.5).with(Dimension::Pace, 1.0)),
        create_teacher("B", "Biology", Persona::uniform(0.5).with(Dimension::Interactivity, 1.0)),
    ];

    let ranked = rank_teachers(&teachers, &student, None);

    // A: 3 * 1.0 = 3.0; B: pace 3 * 0.5 + interactivity 2 * 0.5 = 2.5
    assert_eq!(ranked[0].teacher_id, "B");
    assert_eq!(ranked[0].compatibility_score, 28.57);
    assert_eq!(ranked[1].teacher_id, "A");
    assert_eq!(ranked[1].compatibility_score, 25.0);
    assert_eq!(ranked[1].why.worst[0], Dimension::Pace);
}

#[test]
fn test_subject_filter() {
    let ranked = rank_teachers(&create_corpus(), &Persona::new(), Some("Biology"));

    let mut ids: Vec<&str> = ranked.iter().map(|m| m.teacher_id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "3", "4"]);

    for m in &ranked {
        assert_eq!(m.subject.trim(), "Biology");
    }
}

#[test]
fn test_unknown_subject_is_empty() {
    let ranked = rank_teachers(&create_corpus(), &Persona::new(), Some("Astrology"));
    assert!(ranked.is_empty());
}

#[test]
fn test_empty_corpus() {
    let ranked = rank_teachers(&[], &Persona::uniform(0.7), None);
    assert!(ranked.is_empty());
}

#[test]
fn test_ranking_is_deterministic() {
    let corpus = create_corpus();
    let student = Persona::new()
        .with(Dimension::Structure, 0.2)
        .with(Dimension::ContextNeed, 0.9);

    let first = rank_teachers(&corpus, &student, None);
    for _ in 0..5 {
        assert_eq!(rank_teachers(&corpus, &student, None), first);
    }
}

#[test]
fn test_sample_corpus_ranks() {
    let teachers = parse_teachers(SAMPLE_CORPUS).expect("sample corpus should parse");
    assert!(!teachers.is_empty());

    // A student shaped exactly like the first teacher finds them first
    let student = teachers[0].persona;
    let ranked = rank_teachers(&teachers, &student, Some(teachers[0].subject.as_str()));

    assert_eq!(ranked[0].teacher_id, teachers[0].teacher_id);
    assert_eq!(ranked[0].compatibility_score, 100.0);
}

#[test]
fn test_store_snapshot_feeds_ranking() {
    let store = CorpusStore::from_teachers("data/teachers.json", create_corpus());

    let snapshot = tokio_test::block_on(store.snapshot());
    let ranked = rank_teachers(&snapshot, &Persona::uniform(0.9), Some("Physics"));

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].teacher_id, "2");
    assert_eq!(ranked[0].compatibility_score, 100.0);
}
