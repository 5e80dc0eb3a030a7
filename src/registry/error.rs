use thiserror::Error;

use crate::trie;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The student '{0}' is not registered")]
    UnknownStudent(String),
    #[error("The career '{0}' does not exist")]
    UnknownCareer(String),
    #[error("The course '{course}' is not offered by '{career}'")]
    UnknownCourse { career: String, course: String },
    #[error(transparent)]
    Trie(#[from] trie::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
