//! Input validation
//!
//! Validators turn raw path parameters and JSON bodies into typed values.
//! Fields are checked in declaration order and only the first violation is
//! reported. Unknown fields are ignored.

use crate::models::{
    Course, CourseId, CourseKey, CoursePatch, Student, StudentId, StudentKey, StudentPatch,
};
use serde_json::{Map, Value};
use thiserror::Error;

/// Largest integer a JSON number can carry without losing precision (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Required length of a student id
pub const STUDENT_ID_LEN: usize = 9;

/// Validation error
///
/// The `Display` text is what API clients see, so it never mentions the field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value has the wrong type, or is missing (`received` is "undefined")
    #[error("Invalid input: expected {expected}, received {received}")]
    InvalidType {
        field: String,
        expected: &'static str,
        received: &'static str,
    },

    /// String that must not be empty was empty
    #[error("Too small: expected string to have >=1 characters")]
    EmptyString { field: String },

    /// Student id has the wrong number of characters
    #[error("Student Id must contain 9 characters")]
    StudentIdLength,

    /// Student id has a non-digit character
    #[error("Student Id must contain only digits")]
    StudentIdDigits,
}

impl ValidationError {
    fn invalid_type(field: &str, expected: &'static str, received: &'static str) -> Self {
        ValidationError::InvalidType {
            field: field.to_string(),
            expected,
            received,
        }
    }

    /// Name of the offending field, if the rule is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidType { field, .. } | ValidationError::EmptyString { field } => {
                Some(field.as_str())
            }
            ValidationError::StudentIdLength | ValidationError::StudentIdDigits => {
                Some("studentId")
            }
        }
    }
}

/// Build a typed value from untrusted JSON
pub trait Validate: Sized {
    fn validate(value: &Value) -> Result<Self, ValidationError>;
}

/// Validate a student id from a path parameter or body field
pub fn student_id(raw: &str) -> Result<StudentId, ValidationError> {
    if raw.chars().count() != STUDENT_ID_LEN {
        return Err(ValidationError::StudentIdLength);
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::StudentIdDigits);
    }
    Ok(raw.to_string())
}

/// Validate a course id taken from a path parameter.
///
/// The raw text is read as a number first, so surrounding whitespace is
/// tolerated but anything non-numeric is reported as `NaN`.
pub fn course_id(raw: &str) -> Result<CourseId, ValidationError> {
    let parsed = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ValidationError::invalid_type("courseId", "number", "NaN"))?;

    float_to_int("courseId", parsed)
}

fn float_to_int(field: &str, n: f64) -> Result<i64, ValidationError> {
    if n.fract() != 0.0 || n.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(ValidationError::invalid_type(field, "int", "number"));
    }
    Ok(n as i64)
}

/// Name of a JSON value's type as reported in error messages
pub fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

fn object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::invalid_type("", "object", type_name(Some(value))))
}

fn int_value(field: &str, value: Option<&Value>) -> Result<i64, ValidationError> {
    match value {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) if i.unsigned_abs() <= MAX_SAFE_INTEGER as u64 => Ok(i),
            Some(_) => Err(ValidationError::invalid_type(field, "int", "number")),
            None => float_to_int(field, n.as_f64().unwrap_or(f64::NAN)),
        },
        other => Err(ValidationError::invalid_type(field, "number", type_name(other))),
    }
}

fn string_value(field: &str, value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        other => Err(ValidationError::invalid_type(field, "string", type_name(other))),
    }
}

fn non_empty_string(field: &str, value: Option<&Value>) -> Result<String, ValidationError> {
    let s = string_value(field, value)?;
    if s.is_empty() {
        return Err(ValidationError::EmptyString {
            field: field.to_string(),
        });
    }
    Ok(s)
}

fn array_of<T>(
    field: &str,
    value: Option<&Value>,
    item: impl Fn(&str, Option<&Value>) -> Result<T, ValidationError>,
) -> Result<Vec<T>, ValidationError> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, v)| item(&format!("{}[{}]", field, i), Some(v)))
            .collect(),
        other => Err(ValidationError::invalid_type(field, "array", type_name(other))),
    }
}

fn student_id_value(value: Option<&Value>) -> Result<StudentId, ValidationError> {
    let raw = string_value("studentId", value)?;
    student_id(&raw)
}

/// Run `check` only when the field is present
fn optional<T>(
    obj: &Map<String, Value>,
    field: &str,
    check: impl Fn(&str, Option<&Value>) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    match obj.get(field) {
        None => Ok(None),
        some => check(field, some).map(Some),
    }
}

impl Validate for Course {
    fn validate(value: &Value) -> Result<Self, ValidationError> {
        let obj = object(value)?;
        Ok(Course {
            course_id: int_value("courseId", obj.get("courseId"))?,
            course_title: string_value("courseTitle", obj.get("courseTitle"))?,
            instructors: array_of("instructors", obj.get("instructors"), string_value)?,
        })
    }
}

impl Validate for CoursePatch {
    fn validate(value: &Value) -> Result<Self, ValidationError> {
        let obj = object(value)?;
        Ok(CoursePatch {
            course_id: int_value("courseId", obj.get("courseId"))?,
            course_title: optional(obj, "courseTitle", string_value)?,
            instructors: optional(obj, "instructors", |f, v| array_of(f, v, string_value))?,
        })
    }
}

impl Validate for CourseKey {
    fn validate(value: &Value) -> Result<Self, ValidationError> {
        let obj = object(value)?;
        Ok(CourseKey {
            course_id: int_value("courseId", obj.get("courseId"))?,
        })
    }
}

impl Validate for Student {
    fn validate(value: &Value) -> Result<Self, ValidationError> {
        let obj = object(value)?;
        Ok(Student {
            student_id: student_id_value(obj.get("studentId"))?,
            name: non_empty_string("name", obj.get("name"))?,
            courses: optional(obj, "courses", |f, v| array_of(f, v, int_value))?
                .unwrap_or_default(),
        })
    }
}

impl Validate for StudentPatch {
    fn validate(value: &Value) -> Result<Self, ValidationError> {
        let obj = object(value)?;
        Ok(StudentPatch {
            student_id: student_id_value(obj.get("studentId"))?,
            name: optional(obj, "name", non_empty_string)?,
            courses: optional(obj, "courses", |f, v| array_of(f, v, int_value))?,
        })
    }
}

impl Validate for StudentKey {
    fn validate(value: &Value) -> Result<Self, ValidationError> {
        let obj = object(value)?;
        Ok(StudentKey {
            student_id: student_id_value(obj.get("studentId"))?,
        })
    }
}
