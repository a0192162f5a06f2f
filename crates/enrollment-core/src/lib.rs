//! Enrollment Core - Domain types and storage for the Enrollment API
//!
//! This crate provides everything the HTTP layer needs below the wire:
//! - Student and course models with their partial-update patches
//! - Validators turning raw JSON and path input into typed values
//! - An in-memory store with the create/update/delete contract
//! - Error types

pub mod error;
pub mod models;
pub mod seed;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use error::{StoreError, StoreResult};
pub use models::{
    Course, CourseId, CourseKey, CoursePatch, CourseRef, Student, StudentCourses, StudentId,
    StudentKey, StudentPatch,
};
pub use store::{Collection, Entity, Store};
pub use validation::{Validate, ValidationError};
