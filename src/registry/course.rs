use super::Offering;

/// Teaching staff roles, most senior first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Role {
    Prof,
    Jtp,
    Ay1,
    Ay2,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Prof, Role::Jtp, Role::Ay1, Role::Ay2];

    /// Position of the role in a staff array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Students a single member of this role can take on.
    pub const fn students_per_member(self) -> u32 {
        match self {
            Role::Prof => 250,
            Role::Jtp => 100,
            Role::Ay1 => 20,
            Role::Ay2 => 30,
        }
    }
}

/// A course, shared by every career that offers it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Course {
    /// Staff counts indexed by [`Role::index`]
    staff: [u32; 4],
    /// Enrolled student ids, in enrolment order
    enrolled: Vec<String>,
    /// Every career and name the course is listed under
    offered_as: Vec<Offering>,
}

impl Course {
    pub(super) fn new(offered_as: Vec<Offering>) -> Self {
        Course {
            offered_as,
            ..Default::default()
        }
    }

    pub fn staff(&self) -> [u32; 4] {
        self.staff
    }

    pub fn enrolled(&self) -> &[String] {
        &self.enrolled
    }

    pub fn offered_as(&self) -> &[Offering] {
        &self.offered_as
    }

    /// The number of students the current staff can take on: the tightest
    /// limit over all roles.
    pub fn capacity(&self) -> u32 {
        Role::ALL
            .into_iter()
            .map(|role| self.staff[role.index()].saturating_mul(role.students_per_member()))
            .min()
            .unwrap_or_default()
    }

    pub fn exceeds_capacity(&self) -> bool {
        self.enrolled.len() > self.capacity() as usize
    }

    pub(super) fn enroll(&mut self, student: String) {
        self.enrolled.push(student);
    }

    pub(super) fn add_staff(&mut self, role: Role) {
        self.staff[role.index()] += 1;
    }

    /// Drops every enrolment, handing back the students that were enrolled.
    pub(super) fn take_enrolled(&mut self) -> Vec<String> {
        std::mem::take(&mut self.enrolled)
    }
}
