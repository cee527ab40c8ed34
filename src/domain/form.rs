//! Form controls and snapshot capture.

use std::fmt;

use crate::domain::AppError;
use crate::ports::FormDocument;

/// Named input controls of the timetable-creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormControl {
    TimetableName,
    ClassDays,
    MorningPeriods,
    AfternoonPeriods,
    GradeClass,
    Subject,
    Teacher,
    Classroom,
}

impl FormControl {
    /// All controls in document order.
    pub const ALL: [FormControl; 8] = [
        FormControl::TimetableName,
        FormControl::ClassDays,
        FormControl::MorningPeriods,
        FormControl::AfternoonPeriods,
        FormControl::GradeClass,
        FormControl::Subject,
        FormControl::Teacher,
        FormControl::Classroom,
    ];

    /// Control name as it appears in the form document.
    pub fn name(&self) -> &'static str {
        match self {
            FormControl::TimetableName => "timetable-name",
            FormControl::ClassDays => "classDays",
            FormControl::MorningPeriods => "morningPeriods",
            FormControl::AfternoonPeriods => "afternoonPeriods",
            FormControl::GradeClass => "gradeClass",
            FormControl::Subject => "subject",
            FormControl::Teacher => "teacher",
            FormControl::Classroom => "classroom",
        }
    }

    /// Look up a control by its document name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.name() == name)
    }
}

impl fmt::Display for FormControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw control values captured at submit time.
///
/// Values are kept verbatim; empty strings are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub timetable_name: String,
    pub class_days: String,
    pub morning_periods: String,
    pub afternoon_periods: String,
    pub grade_class: String,
    pub subject: String,
    pub teacher: String,
    pub classroom: String,
}

impl FormSnapshot {
    pub fn get(&self, control: FormControl) -> &str {
        match control {
            FormControl::TimetableName => &self.timetable_name,
            FormControl::ClassDays => &self.class_days,
            FormControl::MorningPeriods => &self.morning_periods,
            FormControl::AfternoonPeriods => &self.afternoon_periods,
            FormControl::GradeClass => &self.grade_class,
            FormControl::Subject => &self.subject,
            FormControl::Teacher => &self.teacher,
            FormControl::Classroom => &self.classroom,
        }
    }

    fn slot(&mut self, control: FormControl) -> &mut String {
        match control {
            FormControl::TimetableName => &mut self.timetable_name,
            FormControl::ClassDays => &mut self.class_days,
            FormControl::MorningPeriods => &mut self.morning_periods,
            FormControl::AfternoonPeriods => &mut self.afternoon_periods,
            FormControl::GradeClass => &mut self.grade_class,
            FormControl::Subject => &mut self.subject,
            FormControl::Teacher => &mut self.teacher,
            FormControl::Classroom => &mut self.classroom,
        }
    }
}

/// A form document whose required controls have all been found.
///
/// Binding is the only point where absent controls are detected. Once bound,
/// every capture yields a complete snapshot.
pub struct FormBinding<'a, D: FormDocument + ?Sized> {
    document: &'a D,
}

impl<'a, D: FormDocument + ?Sized> FormBinding<'a, D> {
    /// Verify that every control exists in the document.
    pub fn bind(document: &'a D) -> Result<Self, AppError> {
        let missing: Vec<String> = FormControl::ALL
            .iter()
            .filter(|control| !document.has_control(control.name()))
            .map(|control| control.name().to_string())
            .collect();

        if !missing.is_empty() {
            tracing::error!(missing = ?missing, "form controls not found; submission disabled");
            return Err(AppError::MissingControls(missing));
        }

        Ok(Self { document })
    }

    /// Read the current value of every control.
    pub fn capture(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::default();
        for control in FormControl::ALL {
            *snapshot.slot(control) =
                self.document.control_value(control.name()).unwrap_or_default();
        }
        snapshot
    }
}
