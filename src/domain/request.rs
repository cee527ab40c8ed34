//! Schedule request wire model and the form-to-request mapping.

use serde::{Deserialize, Serialize};

use crate::domain::FormSnapshot;

/// Subject category sent when the form does not collect one.
pub const DEFAULT_CATEGORY: &str = "unknown";
pub const DEFAULT_WEEKLY_HOURS: u32 = 1;
pub const DEFAULT_PRIORITY: u32 = 1;
pub const DEFAULT_REQUIRES_CONSECUTIVE: bool = false;
pub const DEFAULT_MAX_PERIODS_PER_DAY: u32 = 1;
pub const DEFAULT_STUDENT_COUNT: u32 = 0;
/// Placeholder identifier for the single teacher in a request.
pub const PLACEHOLDER_TEACHER_ID: &str = "T001";
/// Placeholder identifier for the single classroom in a request.
pub const PLACEHOLDER_CLASSROOM_ID: &str = "R001";
pub const DEFAULT_FLOOR: u32 = 1;
pub const DEFAULT_LOCATION: &str = "unknown";
pub const DEFAULT_ROOM_TYPE: &str = "ordinary classroom";
pub const DEFAULT_CAPACITY: u32 = 0;
pub const DEFAULT_IS_SPECIAL: bool = false;

/// Request body for the scheduling service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub classes: Vec<ClassSpec>,
    pub teachers: Vec<TeacherSpec>,
    pub classrooms: Vec<ClassroomSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    pub grade: String,
    pub name: String,
    pub student_count: u32,
    pub subjects: Vec<SubjectRequirement>,
}

/// Weekly teaching requirement for one subject of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRequirement {
    pub name: String,
    pub category: String,
    pub weekly_hours: u32,
    pub priority: u32,
    pub requires_consecutive_periods: bool,
    pub max_periods_per_day: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSpec {
    pub id: String,
    pub name: String,
    /// Subjects this teacher may teach.
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomSpec {
    pub id: String,
    pub name: String,
    pub floor: u32,
    pub location: String,
    pub room_type: String,
    pub capacity: u32,
    pub is_special: bool,
}

/// Map a captured form into a request for the scheduling service.
///
/// Always yields one class with one subject, one teacher and one classroom.
/// Fields the form does not collect are filled with the `DEFAULT_*` and
/// `PLACEHOLDER_*` constants of this module.
pub fn build_request(snapshot: &FormSnapshot) -> ScheduleRequest {
    let subject = SubjectRequirement {
        name: snapshot.subject.clone(),
        category: DEFAULT_CATEGORY.to_string(),
        weekly_hours: DEFAULT_WEEKLY_HOURS,
        priority: DEFAULT_PRIORITY,
        requires_consecutive_periods: DEFAULT_REQUIRES_CONSECUTIVE,
        max_periods_per_day: DEFAULT_MAX_PERIODS_PER_DAY,
    };

    let class = ClassSpec {
        grade: snapshot.grade_class.clone(),
        name: snapshot.grade_class.clone(),
        student_count: DEFAULT_STUDENT_COUNT,
        subjects: vec![subject],
    };

    let teacher = TeacherSpec {
        id: PLACEHOLDER_TEACHER_ID.to_string(),
        name: snapshot.teacher.clone(),
        subjects: vec![snapshot.subject.clone()],
    };

    let classroom = ClassroomSpec {
        id: PLACEHOLDER_CLASSROOM_ID.to_string(),
        name: snapshot.classroom.clone(),
        floor: DEFAULT_FLOOR,
        location: DEFAULT_LOCATION.to_string(),
        room_type: DEFAULT_ROOM_TYPE.to_string(),
        capacity: DEFAULT_CAPACITY,
        is_special: DEFAULT_IS_SPECIAL,
    };

    ScheduleRequest { classes: vec![class], teachers: vec![teacher], classrooms: vec![classroom] }
}
