//! Startup data set
//!
//! Student 650610003 is enrolled in 269101, which has no course record.

use crate::models::{Course, Student};

pub fn students() -> Vec<Student> {
    vec![
        Student {
            student_id: "650610001".to_string(),
            name: "Matt".to_string(),
            courses: vec![261207, 261497],
        },
        Student {
            student_id: "650610002".to_string(),
            name: "Cherry".to_string(),
            courses: vec![261497],
        },
        Student {
            student_id: "650610003".to_string(),
            name: "Bright".to_string(),
            courses: vec![261207, 269101],
        },
    ]
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            course_id: 261207,
            course_title: "Basic Computer Engineering Lab".to_string(),
            instructors: vec!["Somchai P.".to_string(), "Kanda W.".to_string()],
        },
        Course {
            course_id: 261497,
            course_title: "Full Stack Development".to_string(),
            instructors: vec!["Somchai P.".to_string()],
        },
        Course {
            course_id: 261205,
            course_title: "Computer Engineering Laboratory".to_string(),
            instructors: vec!["Niran T.".to_string()],
        },
    ]
}
