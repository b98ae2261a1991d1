//! Classroom Seating Example
//!
//! Builds a 5x6 classroom with two missing desks, a roster of twenty
//! students carrying the full mix of constraints, and both soft rules
//! enabled; then generates a chart and prints what the surrounding app
//! would show: the grid, the violation report, and the persisted
//! seat-to-id mapping.
//!
//! Pass a number to fix the seed: `cargo run -p classroom -- 42`.
//! `RUST_LOG=seatplan_solver=trace` surfaces the repair loop's swaps.

use std::collections::HashMap;

use seatplan_core::{
    AcademicLevel, Gender, Layout, RoomConfig, RowZone, Student, StudentId, Violation,
    ViolationKind,
};
use seatplan_solver::{evaluate, SeatingGenerator};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    println!("seatplan Classroom Example");
    println!("==========================\n");

    let room = demo_room();
    let roster = demo_roster();
    println!(
        "Problem: {} students in a {}x{} room ({} usable seats)\n",
        roster.len(),
        room.rows,
        room.cols,
        room.usable_seats()
    );

    let mut generator = match std::env::args().nth(1).and_then(|arg| arg.parse().ok()) {
        Some(seed) => {
            println!("Seeded run: {seed}\n");
            SeatingGenerator::with_seed(seed)
        }
        None => SeatingGenerator::new(),
    };

    let layout = match generator.generate(&roster, &room) {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("cannot seat this class: {err}");
            std::process::exit(1);
        }
    };

    print_chart(&layout, &room);

    let report = evaluate(&layout, &room);
    println!("\nScore: {}", report.score);
    if report.is_clean() {
        println!("All constraints satisfied.");
    } else {
        println!("{} violations remain:", report.violations.len());
        let names: HashMap<StudentId, &str> =
            roster.iter().map(|s| (s.id, s.name.as_str())).collect();
        for violation in &report.violations {
            println!("  {}", describe(violation, &names));
        }
    }

    match serde_json::to_string(&layout.to_id_grid()) {
        Ok(json) => println!("\nPersisted id grid:\n{json}"),
        Err(err) => eprintln!("cannot serialize the chart: {err}"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive("seatplan_solver=info".parse().unwrap())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// The room: back-area desks 17 and 23 are missing, both soft rules on.
fn demo_room() -> RoomConfig {
    RoomConfig::new(5, 6)
        .with_void_seats([17, 23])
        .with_gender_balance(true)
        .with_academic_diversity(true)
}

fn demo_roster() -> Vec<Student> {
    let id = StudentId::new;
    vec![
        Student::new(id(1), "Emma")
            .with_gender(Gender::Female)
            .with_level(AcademicLevel::Strong)
            .paired_with(id(2)),
        Student::new(id(2), "Oliver").with_gender(Gender::Male),
        Student::new(id(3), "Ada")
            .with_gender(Gender::Female)
            .with_level(AcademicLevel::Support),
        Student::new(id(4), "William")
            .with_gender(Gender::Male)
            .separated_from(id(5)),
        Student::new(id(5), "Lucas")
            .with_gender(Gender::Male)
            .separated_from(id(4)),
        Student::new(id(6), "Sofie")
            .with_gender(Gender::Female)
            .locked_to(RowZone::Front),
        Student::new(id(7), "Nora")
            .with_gender(Gender::Female)
            .with_level(AcademicLevel::Support)
            .separated_from(id(8)),
        Student::new(id(8), "Filip")
            .with_gender(Gender::Male)
            .separated_from(id(7)),
        Student::new(id(9), "Ella").with_gender(Gender::Female),
        Student::new(id(10), "Oskar").with_gender(Gender::Male).fixed_at(8),
        Student::new(id(11), "Maja")
            .with_gender(Gender::Female)
            .with_level(AcademicLevel::Support)
            .locked_to(RowZone::Front),
        Student::new(id(12), "Emil")
            .with_gender(Gender::Male)
            .with_level(AcademicLevel::Strong),
        Student::new(id(13), "Frida").with_gender(Gender::Female),
        Student::new(id(14), "Theo")
            .with_gender(Gender::Male)
            .locked_to(RowZone::Back),
        Student::new(id(15), "Selma")
            .with_gender(Gender::Female)
            .paired_with(id(13)),
        Student::new(id(16), "Jonas")
            .with_gender(Gender::Male)
            .with_level(AcademicLevel::Strong),
        Student::new(id(17), "Ingrid")
            .with_gender(Gender::Female)
            .locked_to(RowZone::Back),
        Student::new(id(18), "Aksel")
            .with_gender(Gender::Male)
            .with_level(AcademicLevel::Support),
        Student::new(id(19), "Tuva").with_gender(Gender::Female),
        Student::new(id(20), "Mikkel").with_gender(Gender::Male),
    ]
}

fn print_chart(layout: &Layout, room: &RoomConfig) {
    let width = 9;
    let line = "-".repeat((width + 1) * room.cols + 1);

    println!("{line}");
    for row in 0..room.rows {
        print!("|");
        for col in 0..room.cols {
            let seat = room.seat_at(row, col);
            let label = match layout.student_at(seat) {
                Some(student) => student.name.as_str(),
                None if room.is_void(seat) => "####",
                None => "",
            };
            print!("{label:^width$}|");
        }
        println!();
    }
    println!("{line}");
}

fn describe(violation: &Violation, names: &HashMap<StudentId, &str>) -> String {
    let name = |id: StudentId| names.get(&id).copied().unwrap_or("?");
    let student = name(violation.student);
    match (violation.kind, violation.related) {
        (ViolationKind::Separation, Some(other)) => {
            format!("separation: {student} sits next to {}", name(other))
        }
        (ViolationKind::Pairing, Some(other)) => {
            format!("pairing: {student} is not beside {}", name(other))
        }
        (ViolationKind::GenderClash, Some(other)) => {
            format!("gender-clash: {student} beside {}", name(other))
        }
        (ViolationKind::LevelClumping, Some(other)) => {
            format!("level-clumping: {student} beside {}", name(other))
        }
        (kind, None) => format!("{kind}: {student}"),
    }
}
