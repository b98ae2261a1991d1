//! Tests for the constraint evaluator

use seatplan_core::{
    AcademicLevel, Evaluation, Gender, Layout, RoomConfig, Student, StudentId, ViolationKind,
};

use super::evaluator::evaluate;

fn sid(n: u32) -> StudentId {
    StudentId::new(n)
}

fn student(n: u32) -> Student {
    Student::new(sid(n), format!("s{n}"))
}

#[test]
fn test_empty_layout_scores_base() {
    let room = RoomConfig::new(3, 3);
    let result = evaluate(&Layout::empty(room.capacity()), &room);
    assert_eq!(result, Evaluation::from_violations(Vec::new()));
    assert_eq!(result.score, 100);
    assert!(result.is_clean());
}

#[test]
fn test_student_without_constraints_is_clean() {
    let room = RoomConfig::new(2, 2);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1));
    layout.place(1, student(2));

    assert!(evaluate(&layout, &room).is_clean());
}

#[test]
fn test_evaluate_is_deterministic() {
    let room = RoomConfig::new(2, 3).with_gender_balance(true);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1).with_gender(Gender::Male).separated_from(sid(2)));
    layout.place(1, student(2).with_gender(Gender::Male).paired_with(sid(3)));
    layout.place(4, student(3));

    assert_eq!(evaluate(&layout, &room), evaluate(&layout, &room));
}

#[test]
fn test_separation_symmetric_on_diagonal() {
    // 2x2, diagonal corners, both list each other.
    let room = RoomConfig::new(2, 2);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1).separated_from(sid(2)));
    layout.place(3, student(2).separated_from(sid(1)));

    let result = evaluate(&layout, &room);
    assert_eq!(result.count_of(ViolationKind::Separation), 2);
    assert!(result
        .violations
        .iter()
        .any(|v| v.student == sid(1) && v.related == Some(sid(2))));
    assert!(result
        .violations
        .iter()
        .any(|v| v.student == sid(2) && v.related == Some(sid(1))));
}

#[test]
fn test_separation_is_reported_for_the_owner_only() {
    // Only student 1 lists the other; the scan flags one record.
    let room = RoomConfig::new(1, 2);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1).separated_from(sid(2)));
    layout.place(1, student(2));

    let result = evaluate(&layout, &room);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].student, sid(1));
    assert_eq!(result.violations[0].kind, ViolationKind::Separation);
}

#[test]
fn test_separation_counts_vertical_neighbors() {
    let room = RoomConfig::new(2, 1);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1).separated_from(sid(2)));
    layout.place(1, student(2));

    assert_eq!(
        evaluate(&layout, &room).count_of(ViolationKind::Separation),
        1
    );
}

#[test]
fn test_separation_ends_past_one_king_move() {
    let room = RoomConfig::new(1, 3);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1).separated_from(sid(2)));
    layout.place(2, student(2));

    assert!(evaluate(&layout, &room).is_clean());
}

#[test]
fn test_pairing_requires_direct_side_neighbor() {
    let room = RoomConfig::new(1, 3);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1).paired_with(sid(2)));
    layout.place(2, student(2));

    let result = evaluate(&layout, &room);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].kind, ViolationKind::Pairing);
    assert_eq!(result.violations[0].student, sid(1));
    assert_eq!(result.violations[0].related, Some(sid(2)));

    // Moving the buddy beside the student clears it. The pairing is
    // one-directional: student 2 demands nothing.
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1).paired_with(sid(2)));
    layout.place(1, student(2));
    assert!(evaluate(&layout, &room).is_clean());
}

#[test]
fn test_pairing_is_not_satisfied_vertically() {
    // Same column, adjacent rows: within one king-move but not "beside".
    let room = RoomConfig::new(2, 1);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1).paired_with(sid(2)));
    layout.place(1, student(2));

    assert_eq!(evaluate(&layout, &room).count_of(ViolationKind::Pairing), 1);
}

#[test]
fn test_pairing_satisfied_on_both_sides() {
    let room = RoomConfig::new(1, 3);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(2));
    layout.place(1, student(1).paired_with(sid(2)).paired_with(sid(3)));
    layout.place(2, student(3));

    assert!(evaluate(&layout, &room).is_clean());
}

#[test]
fn test_gender_clash_needs_the_toggle() {
    let mut layout = Layout::empty(2);
    layout.place(0, student(1).with_gender(Gender::Female));
    layout.place(1, student(2).with_gender(Gender::Female));

    let off = RoomConfig::new(1, 2);
    assert!(evaluate(&layout, &off).is_clean());

    let on = RoomConfig::new(1, 2).with_gender_balance(true);
    let result = evaluate(&layout, &on);
    // One record per side of the pair.
    assert_eq!(result.count_of(ViolationKind::GenderClash), 2);
}

#[test]
fn test_unspecified_gender_is_exempt() {
    let room = RoomConfig::new(1, 3).with_gender_balance(true);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1).with_gender(Gender::Male));
    layout.place(1, student(2));
    layout.place(2, student(3));

    assert!(evaluate(&layout, &room).is_clean());
}

#[test]
fn test_level_clumping_flags_extremes_only() {
    let on = RoomConfig::new(1, 2).with_academic_diversity(true);

    let mut support_pair = Layout::empty(2);
    support_pair.place(0, student(1).with_level(AcademicLevel::Support));
    support_pair.place(1, student(2).with_level(AcademicLevel::Support));
    assert_eq!(
        evaluate(&support_pair, &on).count_of(ViolationKind::LevelClumping),
        2
    );

    let mut average_pair = Layout::empty(2);
    average_pair.place(0, student(1));
    average_pair.place(1, student(2));
    assert!(evaluate(&average_pair, &on).is_clean());

    let mut mixed_pair = Layout::empty(2);
    mixed_pair.place(0, student(1).with_level(AcademicLevel::Support));
    mixed_pair.place(1, student(2).with_level(AcademicLevel::Strong));
    assert!(evaluate(&mixed_pair, &on).is_clean());
}

#[test]
fn test_level_clumping_needs_the_toggle() {
    let off = RoomConfig::new(1, 2);
    let mut layout = Layout::empty(2);
    layout.place(0, student(1).with_level(AcademicLevel::Strong));
    layout.place(1, student(2).with_level(AcademicLevel::Strong));

    assert!(evaluate(&layout, &off).is_clean());
}

#[test]
fn test_dangling_ids() {
    let room = RoomConfig::new(1, 2);
    let mut layout = Layout::empty(room.capacity());
    // Separation against a student who is not seated never matches;
    // a pairing with an absent buddy is an unmet requirement.
    layout.place(0, student(1).separated_from(sid(99)).paired_with(sid(98)));

    let result = evaluate(&layout, &room);
    assert_eq!(result.count_of(ViolationKind::Separation), 0);
    assert_eq!(result.count_of(ViolationKind::Pairing), 1);
    assert_eq!(result.violations[0].related, Some(sid(98)));
}

#[test]
fn test_violations_are_not_deduplicated() {
    // One enemy on each side produces two records for the same student.
    let room = RoomConfig::new(1, 3);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(2));
    layout.place(1, student(1).separated_from(sid(2)).separated_from(sid(3)));
    layout.place(2, student(3));

    let result = evaluate(&layout, &room);
    assert_eq!(result.count_of(ViolationKind::Separation), 2);
    assert!(result.violations.iter().all(|v| v.student == sid(1)));
}

#[test]
fn test_violations_come_in_seat_scan_order() {
    let room = RoomConfig::new(1, 3);
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, student(1).paired_with(sid(90)));
    layout.place(2, student(2).paired_with(sid(91)));

    let students: Vec<_> = evaluate(&layout, &room)
        .violations
        .iter()
        .map(|v| v.student)
        .collect();
    assert_eq!(students, vec![sid(1), sid(2)]);
}

#[test]
fn test_score_goes_negative_with_many_violations() {
    let room = RoomConfig::new(1, 2);
    let mut lonely = student(1);
    for n in 0..101 {
        lonely = lonely.paired_with(sid(1000 + n));
    }
    let mut layout = Layout::empty(room.capacity());
    layout.place(0, lonely);

    assert_eq!(evaluate(&layout, &room).score, -1);
}

#[test]
fn test_out_of_shape_layout_is_tolerated() {
    // Six slots against a 2x2 room: the extra seats are still scanned
    // without panicking, and the pass stays deterministic.
    let room = RoomConfig::new(2, 2);
    let mut layout = Layout::empty(6);
    layout.place(5, student(1).separated_from(sid(2)));

    assert_eq!(evaluate(&layout, &room), evaluate(&layout, &room));
}
