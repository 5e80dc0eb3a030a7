//! Careers, courses and students, stored in nested tries.
//!
//! A course can be offered by several careers under different names. Every
//! name resolves to the same [`CourseId`], so closing a course through any of
//! its names removes it from all of them.

mod catalog;
mod course;
mod error;

pub use catalog::{Catalog, CourseInfo, Event, Offering};
pub use course::{Course, Role};
pub use error::{Error, Result};

use tracing::debug;

use crate::trie::Trie;

/// Index of a course in the registry.
pub type CourseId = usize;

#[derive(Debug, Default)]
pub struct Registry {
    /// Number of open courses each student is enrolled in
    students: Trie<String, u32>,
    careers: Trie<String, Trie<String, CourseId>>,
    courses: Vec<Course>,
}

impl Registry {
    pub fn new(
        courses: impl IntoIterator<Item = CourseInfo>,
        students: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        let mut registry = Registry::default();

        for student in students {
            registry.students.define(student, 0)?;
        }

        for info in courses {
            let id = registry.courses.len();
            for offering in &info.offered_as {
                if !registry.careers.contains(offering.career.as_str()) {
                    registry
                        .careers
                        .define(offering.career.clone(), Trie::new())?;
                }
                registry
                    .careers
                    .get_mut(offering.career.as_str())
                    .ok_or_else(|| Error::UnknownCareer(offering.career.clone()))?
                    .define(offering.course.clone(), id)?;
            }
            registry.courses.push(Course::new(info.offered_as));
        }

        debug!(
            students = registry.students.len(),
            careers = registry.careers.len(),
            courses = registry.courses.len(),
            "Built registry"
        );
        Ok(registry)
    }

    fn course_id(&self, career: &str, course: &str) -> Result<CourseId> {
        let courses = self
            .careers
            .get(career)
            .ok_or_else(|| Error::UnknownCareer(career.to_owned()))?;
        courses.get(course).copied().ok_or_else(|| Error::UnknownCourse {
            career: career.to_owned(),
            course: course.to_owned(),
        })
    }

    /// The course offered by `career` under the name `course`.
    pub fn course(&self, career: &str, course: &str) -> Result<&Course> {
        let id = self.course_id(career, course)?;
        Ok(&self.courses[id])
    }

    fn course_mut(&mut self, career: &str, course: &str) -> Result<&mut Course> {
        let id = self.course_id(career, course)?;
        Ok(&mut self.courses[id])
    }

    pub fn enroll(&mut self, student: &str, career: &str, course: &str) -> Result<()> {
        if !self.students.contains(student) {
            return Err(Error::UnknownStudent(student.to_owned()));
        }
        self.course_mut(career, course)?.enroll(student.to_owned());
        self.students.modify(student, |count| count + 1)?;
        debug!(student, career, course, "Enrolled student");
        Ok(())
    }

    pub fn add_staff(&mut self, role: Role, career: &str, course: &str) -> Result<()> {
        self.course_mut(career, course)?.add_staff(role);
        debug!(?role, career, course, "Added staff");
        Ok(())
    }

    /// Staff counts in [`Role::ALL`] order.
    pub fn staff(&self, career: &str, course: &str) -> Result<[u32; 4]> {
        Ok(self.course(career, course)?.staff())
    }

    pub fn enrolled(&self, career: &str, course: &str) -> Result<usize> {
        Ok(self.course(career, course)?.enrolled().len())
    }

    pub fn exceeds_capacity(&self, career: &str, course: &str) -> Result<bool> {
        Ok(self.course(career, course)?.exceeds_capacity())
    }

    /// Closes a course: its students drop it and every career stops offering it.
    pub fn close(&mut self, career: &str, course: &str) -> Result<()> {
        let id = self.course_id(career, course)?;
        let closing = &mut self.courses[id];
        let students = closing.take_enrolled();

        for student in &students {
            self.students
                .modify(student.as_str(), |count| count.saturating_sub(1))?;
        }
        for offering in closing.offered_as() {
            self.careers
                .get_mut(offering.career.as_str())
                .ok_or_else(|| Error::UnknownCareer(offering.career.clone()))?
                .delete(offering.course.as_str())?;
        }

        debug!(
            career,
            course,
            students = students.len(),
            names = closing.offered_as().len(),
            "Closed course"
        );
        Ok(())
    }

    /// Every career, in ascending order.
    pub fn careers(&self) -> Vec<String> {
        self.careers.keys()
    }

    /// Every open course of a career, in ascending order.
    pub fn courses(&self, career: &str) -> Result<Vec<String>> {
        self.careers
            .get(career)
            .map(Trie::keys)
            .ok_or_else(|| Error::UnknownCareer(career.to_owned()))
    }

    /// Number of open courses the student is enrolled in.
    pub fn enrollments(&self, student: &str) -> Result<u32> {
        self.students
            .get(student)
            .copied()
            .ok_or_else(|| Error::UnknownStudent(student.to_owned()))
    }

    pub fn apply(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Enroll {
                student,
                career,
                course,
            } => self.enroll(student, career, course),
            Event::Staff {
                role,
                career,
                course,
            } => self.add_staff(*role, career, course),
            Event::Close { career, course } => self.close(career, course),
        }
    }

    pub fn students(&self) -> &Trie<String, u32> {
        &self.students
    }

    pub fn career_trie(&self) -> &Trie<String, Trie<String, CourseId>> {
        &self.careers
    }
}
