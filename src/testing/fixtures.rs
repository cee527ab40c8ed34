use crate::domain::{FormControl, FormSnapshot, ScheduleEntry, ScheduleRequest, build_request};
use crate::services::FormFile;

/// Form holding the reference submission `T1 / G1 / Math / Alice / R101`.
pub fn sample_form() -> FormFile {
    let mut form = FormFile::new();
    form.set("timetable-name", "T1");
    form.set("classDays", "Mon-Fri");
    form.set("morningPeriods", "4");
    form.set("afternoonPeriods", "4");
    form.set("gradeClass", "G1");
    form.set("subject", "Math");
    form.set("teacher", "Alice");
    form.set("classroom", "R101");
    form
}

/// Form with every control present and empty.
pub fn blank_form() -> FormFile {
    let mut form = FormFile::new();
    for control in FormControl::ALL {
        form.set(control.name(), "");
    }
    form
}

pub fn sample_snapshot() -> FormSnapshot {
    FormSnapshot {
        timetable_name: "T1".into(),
        class_days: "Mon-Fri".into(),
        morning_periods: "4".into(),
        afternoon_periods: "4".into(),
        grade_class: "G1".into(),
        subject: "Math".into(),
        teacher: "Alice".into(),
        classroom: "R101".into(),
    }
}

pub fn sample_request() -> ScheduleRequest {
    build_request(&sample_snapshot())
}

pub fn entry(
    class: &str,
    subject: &str,
    teacher: &str,
    classroom: &str,
    weekday: &str,
    period: &str,
    time: &str,
) -> ScheduleEntry {
    ScheduleEntry {
        class: class.into(),
        subject: subject.into(),
        teacher: teacher.into(),
        classroom: classroom.into(),
        weekday: weekday.into(),
        period: period.into(),
        time: time.into(),
    }
}
