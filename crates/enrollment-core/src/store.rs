//! In-memory store
//!
//! [`Store`] owns the student and course collections. Each [`Collection`]
//! is an ordered `Vec` searched linearly: collections are small and ids are
//! not sorted, so there is no secondary index.
//!
//! Every mutating method either applies its change completely or returns an
//! error and leaves the collection untouched.

use crate::error::{StoreError, StoreResult};
use crate::models::{
    Course, CourseId, CoursePatch, CourseRef, Student, StudentCourses, StudentId, StudentPatch,
};
use crate::seed;
use std::fmt;
use tracing::{debug, info};

/// A record addressable by a unique, immutable id
pub trait Entity: Clone {
    /// Identifier type
    type Id: PartialEq + fmt::Display;

    /// Partial update carrying the id of the record it applies to
    type Patch;

    /// Human readable kind, used in error messages
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    fn patch_id(patch: &Self::Patch) -> &Self::Id;

    /// Shallow merge: fields present in the patch replace ours, absent ones are kept
    fn merge(&mut self, patch: Self::Patch);
}

impl Entity for Course {
    type Id = CourseId;
    type Patch = CoursePatch;
    const KIND: &'static str = "Course";

    fn id(&self) -> &CourseId {
        &self.course_id
    }

    fn patch_id(patch: &CoursePatch) -> &CourseId {
        &patch.course_id
    }

    fn merge(&mut self, patch: CoursePatch) {
        if let Some(title) = patch.course_title {
            self.course_title = title;
        }
        if let Some(instructors) = patch.instructors {
            self.instructors = instructors;
        }
    }
}

impl Entity for Student {
    type Id = StudentId;
    type Patch = StudentPatch;
    const KIND: &'static str = "Student";

    fn id(&self) -> &StudentId {
        &self.student_id
    }

    fn patch_id(patch: &StudentPatch) -> &StudentId {
        &patch.student_id
    }

    fn merge(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(courses) = patch.courses {
            self.courses = courses;
        }
    }
}

/// Ordered collection of entities with unique ids
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<E> {
    items: Vec<E>,
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Entity> Collection<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entities in insertion order
    pub fn all(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &E::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// First entity with a matching id, if any
    pub fn find(&self, id: &E::Id) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Look up an entity, failing with `NotFound`
    pub fn get(&self, id: &E::Id) -> StoreResult<&E> {
        self.find(id).ok_or_else(|| StoreError::not_found(E::KIND, id))
    }

    /// Append a new entity. Rejects ids that are already present.
    pub fn insert(&mut self, entity: E) -> StoreResult<&E> {
        if self.position(entity.id()).is_some() {
            return Err(StoreError::conflict(E::KIND, entity.id()));
        }

        info!(kind = E::KIND, id = %entity.id(), "Inserting entity");
        self.items.push(entity);
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Shallow-merge a patch over the entity it names
    pub fn update(&mut self, patch: E::Patch) -> StoreResult<&E> {
        let index = self
            .position(E::patch_id(&patch))
            .ok_or_else(|| StoreError::not_found(E::KIND, E::patch_id(&patch)))?;

        info!(kind = E::KIND, id = %E::patch_id(&patch), "Updating entity");
        let entity = &mut self.items[index];
        entity.merge(patch);
        Ok(&*entity)
    }

    /// Remove the entity with the given id and hand it back
    pub fn remove(&mut self, id: &E::Id) -> StoreResult<E> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::not_found(E::KIND, id))?;

        info!(kind = E::KIND, id = %id, "Removing entity");
        Ok(self.items.remove(index))
    }
}

impl<E> From<Vec<E>> for Collection<E> {
    fn from(items: Vec<E>) -> Self {
        Self { items }
    }
}

/// The service's whole data set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    students: Collection<Student>,
    courses: Collection<Course>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from existing records.
    ///
    /// Ids are expected to be unique; later duplicates are never reachable by lookup.
    pub fn with_data(students: Vec<Student>, courses: Vec<Course>) -> Self {
        Self {
            students: students.into(),
            courses: courses.into(),
        }
    }

    /// Create a store populated with the startup data set
    pub fn seeded() -> Self {
        let store = Self::with_data(seed::students(), seed::courses());
        debug!(
            students = store.students.len(),
            courses = store.courses.len(),
            "Seeded store"
        );
        store
    }

    pub fn students(&self) -> &Collection<Student> {
        &self.students
    }

    pub fn students_mut(&mut self) -> &mut Collection<Student> {
        &mut self.students
    }

    pub fn courses(&self) -> &Collection<Course> {
        &self.courses
    }

    pub fn courses_mut(&mut self) -> &mut Collection<Course> {
        &mut self.courses
    }

    /// Resolve a student's course ids against the course collection.
    ///
    /// Ids with no matching course yield an empty [`CourseRef`] in the same
    /// slot rather than an error.
    pub fn student_courses(&self, student_id: &StudentId) -> StoreResult<StudentCourses> {
        let student = self.students.get(student_id)?;

        let courses = student
            .courses
            .iter()
            .map(|id| match self.courses.find(id) {
                Some(course) => CourseRef::from(course),
                None => {
                    debug!(student_id = %student_id, course_id = id, "Dangling course reference");
                    CourseRef::default()
                }
            })
            .collect();

        Ok(StudentCourses {
            student_id: student.student_id.clone(),
            courses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: CourseId, title: &str, instructors: &[&str]) -> Course {
        Course {
            course_id: id,
            course_title: title.to_string(),
            instructors: instructors.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn student(id: &str, name: &str, courses: Vec<CourseId>) -> Student {
        Student {
            student_id: id.to_string(),
            name: name.to_string(),
            courses,
        }
    }

    #[test]
    fn test_insert_appends() {
        let mut courses = Collection::new();
        courses.insert(course(1, "One", &[])).unwrap();
        courses.insert(course(2, "Two", &[])).unwrap();

        let ids: Vec<_> = courses.all().iter().map(|c| c.course_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_insert_duplicate_leaves_collection_unchanged() {
        let mut courses = Collection::from(vec![course(1, "One", &["A"])]);
        let before = courses.clone();

        let err = courses.insert(course(1, "Other", &[])).unwrap_err();
        assert_eq!(err, StoreError::conflict("Course", 1));
        assert_eq!(courses, before);
    }

    #[test]
    fn test_update_is_shallow_merge() {
        let mut courses = Collection::from(vec![course(1, "Old", &["A"])]);

        let updated = courses
            .update(CoursePatch {
                course_id: 1,
                course_title: Some("New".to_string()),
                instructors: None,
            })
            .unwrap();

        assert_eq!(updated, &course(1, "New", &["A"]));
    }

    #[test]
    fn test_update_unknown_id() {
        let mut courses = Collection::from(vec![course(1, "Old", &["A"])]);
        let before = courses.clone();

        let err = courses
            .update(CoursePatch {
                course_id: 9,
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err, StoreError::not_found("Course", 9));
        assert_eq!(courses, before);
    }

    #[test]
    fn test_remove_then_remove_again() {
        let mut courses = Collection::from(vec![course(1, "One", &[]), course(2, "Two", &[])]);

        let removed = courses.remove(&1).unwrap();
        assert_eq!(removed.course_id, 1);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses.all()[0].course_id, 2);

        assert!(matches!(courses.remove(&1), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_student_merge_keeps_absent_fields() {
        let mut students = Collection::from(vec![student("650610001", "Matt", vec![1, 2])]);

        students
            .update(StudentPatch {
                student_id: "650610001".to_string(),
                name: Some("Matthew".to_string()),
                courses: None,
            })
            .unwrap();

        assert_eq!(students.all()[0], student("650610001", "Matthew", vec![1, 2]));
    }

    #[test]
    fn test_student_courses_with_dangling_reference() {
        let store = Store::with_data(
            vec![student("650610001", "Matt", vec![1, 42])],
            vec![course(1, "One", &[])],
        );

        let resolved = store.student_courses(&"650610001".to_string()).unwrap();
        assert_eq!(resolved.courses.len(), 2);
        assert_eq!(resolved.courses[0].course_id, Some(1));
        assert_eq!(resolved.courses[0].course_title.as_deref(), Some("One"));
        assert_eq!(resolved.courses[1], CourseRef::default());
    }

    #[test]
    fn test_student_courses_unknown_student() {
        let store = Store::new();
        let err = store.student_courses(&"650610099".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Student 650610099 does not exist");
    }

    #[test]
    fn test_seeded_store_ids_are_unique() {
        let store = Store::seeded();
        assert!(!store.students().is_empty());
        assert!(!store.courses().is_empty());

        let courses = store.courses().all();
        for (i, c) in courses.iter().enumerate() {
            assert!(courses[i + 1..].iter().all(|o| o.course_id != c.course_id));
        }
        let students = store.students().all();
        for (i, s) in students.iter().enumerate() {
            assert!(students[i + 1..].iter().all(|o| o.student_id != s.student_id));
        }
    }
}
