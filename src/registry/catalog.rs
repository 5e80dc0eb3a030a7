use super::{Registry, Result, Role};

/// One name a course is listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offering {
    pub career: String,
    pub course: String,
}

impl Offering {
    pub fn new(career: impl Into<String>, course: impl Into<String>) -> Self {
        Offering {
            career: career.into(),
            course: course.into(),
        }
    }
}

/// A course together with every career that offers it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseInfo {
    pub offered_as: Vec<Offering>,
}

impl FromIterator<Offering> for CourseInfo {
    fn from_iter<T: IntoIterator<Item = Offering>>(iter: T) -> Self {
        CourseInfo {
            offered_as: iter.into_iter().collect(),
        }
    }
}

/// A change to replay onto a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "event", rename_all = "lowercase")
)]
pub enum Event {
    Enroll {
        student: String,
        career: String,
        course: String,
    },
    Staff {
        role: Role,
        career: String,
        course: String,
    },
    Close {
        career: String,
        course: String,
    },
}

/// Initial state of a registry plus the events that happened since.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub students: Vec<String>,
    pub courses: Vec<CourseInfo>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<Event>,
}

impl Catalog {
    /// Builds the registry and replays every event in order.
    pub fn build(&self) -> Result<Registry> {
        let mut registry = Registry::new(self.courses.iter().cloned(), self.students.iter().cloned())?;
        for event in &self.events {
            registry.apply(event)?;
        }
        Ok(registry)
    }
}
