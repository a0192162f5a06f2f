//! Student and course records
//!
//! Records serialize with camelCase field names so the wire format matches
//! what API clients send and expect back.

use serde::{Deserialize, Serialize};

/// Course identifier (a safe integer)
pub type CourseId = i64;

/// Student identifier (nine ASCII digits)
pub type StudentId = String;

/// A student and the courses they are enrolled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique, immutable after creation
    pub student_id: StudentId,

    /// Display name
    pub name: String,

    /// Enrolled course ids, in enrollment order.
    /// These are weak references: the course may not exist.
    #[serde(default)]
    pub courses: Vec<CourseId>,
}

/// A course offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique, immutable after creation
    pub course_id: CourseId,

    pub course_title: String,

    pub instructors: Vec<String>,
}

/// Partial update for a course. `None` fields keep their current value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoursePatch {
    pub course_id: CourseId,
    pub course_title: Option<String>,
    pub instructors: Option<Vec<String>>,
}

/// Partial update for a student. `None` fields keep their current value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentPatch {
    pub student_id: StudentId,
    pub name: Option<String>,
    pub courses: Option<Vec<CourseId>>,
}

/// Identifies a course to delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseKey {
    pub course_id: CourseId,
}

/// Identifies a student to delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentKey {
    pub student_id: StudentId,
}

/// One resolved slot of a student's course list.
///
/// Both fields are absent when the referenced course does not exist, which
/// serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,
}

impl From<&Course> for CourseRef {
    fn from(course: &Course) -> Self {
        Self {
            course_id: Some(course.course_id),
            course_title: Some(course.course_title.clone()),
        }
    }
}

/// A student's course list resolved against the course collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCourses {
    pub student_id: StudentId,
    pub courses: Vec<CourseRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_serializes_camel_case() {
        let course = Course {
            course_id: 101,
            course_title: "Algorithms".to_string(),
            instructors: vec!["Dr. A".to_string()],
        };

        assert_eq!(
            serde_json::to_value(&course).unwrap(),
            json!({"courseId": 101, "courseTitle": "Algorithms", "instructors": ["Dr. A"]})
        );
    }

    #[test]
    fn test_student_courses_default_to_empty() {
        let student: Student =
            serde_json::from_value(json!({"studentId": "650610001", "name": "Matt"})).unwrap();
        assert!(student.courses.is_empty());
    }

    #[test]
    fn test_missing_course_ref_serializes_empty() {
        let slot = CourseRef::default();
        assert_eq!(serde_json::to_value(&slot).unwrap(), json!({}));
    }
}
