//! Students and their placement constraints

use std::fmt;

use super::SeatIndex;

/// Stable identifier assigned to a student by the roster editor.
///
/// Ids survive roster edits, so separations and pairings reference
/// students by id rather than by name or position.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentId(u32);

impl StudentId {
    /// Creates an id from its raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        StudentId(id)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StudentId {
    fn from(id: u32) -> Self {
        StudentId(id)
    }
}

/// Gender as recorded by the roster editor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
    /// Not recorded; exempt from the gender-balance rule.
    #[default]
    Unspecified,
}

impl Gender {
    /// Whether the gender participates in gender-balance checks.
    #[inline]
    pub const fn is_specified(&self) -> bool {
        !matches!(self, Gender::Unspecified)
    }
}

/// Academic level on the roster's three-step scale.
///
/// Only the extremes trigger level-clumping violations; seating two
/// `Average` students together is always acceptable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcademicLevel {
    /// Needs extra support.
    Support,
    /// Middle of the scale.
    #[default]
    Average,
    /// Strongest band.
    Strong,
}

impl AcademicLevel {
    /// Whether the level participates in level-clumping checks.
    #[inline]
    pub const fn is_extreme(&self) -> bool {
        matches!(self, AcademicLevel::Support | AcademicLevel::Strong)
    }
}

/// Coarse placement constraint pinning a student to the front or back row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowZone {
    Front,
    Back,
}

/// One roster entry with its placement constraints.
///
/// `separations` lists ids this student must never sit adjacent to in any
/// of the eight surrounding seats; `pairings` lists ids that must occupy a
/// seat directly to the left or right. Both carry set semantics (the
/// roster editor owns deduplication), and ids that match no seated student
/// are simply never flagged.
///
/// # Examples
///
/// ```
/// use seatplan_core::{RowZone, Student, StudentId};
///
/// let nora = Student::new(StudentId::new(7), "Nora")
///     .separated_from(StudentId::new(3))
///     .locked_to(RowZone::Front);
///
/// assert_eq!(nora.zone_lock, Some(RowZone::Front));
/// assert_eq!(nora.separations, vec![StudentId::new(3)]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub gender: Gender,
    pub level: AcademicLevel,
    /// Ids to keep out of all eight neighboring seats.
    pub separations: Vec<StudentId>,
    /// Ids required in one of the two side seats.
    pub pairings: Vec<StudentId>,
    /// Restricts placement to the front or back row.
    pub zone_lock: Option<RowZone>,
    /// Exact seat override. Wins over every other rule unless the seat is
    /// void, in which case the student is placed like any unconstrained one.
    pub fixed_seat: Option<SeatIndex>,
}

impl Student {
    /// Creates an unconstrained student.
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Student {
            id,
            name: name.into(),
            gender: Gender::default(),
            level: AcademicLevel::default(),
            separations: Vec::new(),
            pairings: Vec::new(),
            zone_lock: None,
            fixed_seat: None,
        }
    }

    /// Sets the gender used by the gender-balance rule.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the academic level used by the diversity rule.
    pub fn with_level(mut self, level: AcademicLevel) -> Self {
        self.level = level;
        self
    }

    /// Adds a student this one must not sit adjacent to.
    pub fn separated_from(mut self, other: StudentId) -> Self {
        self.separations.push(other);
        self
    }

    /// Adds a student this one must sit directly beside.
    pub fn paired_with(mut self, other: StudentId) -> Self {
        self.pairings.push(other);
        self
    }

    /// Pins the student to the front or back row.
    pub fn locked_to(mut self, zone: RowZone) -> Self {
        self.zone_lock = Some(zone);
        self
    }

    /// Pins the student to one exact seat.
    pub fn fixed_at(mut self, seat: SeatIndex) -> Self {
        self.fixed_seat = Some(seat);
        self
    }
}
