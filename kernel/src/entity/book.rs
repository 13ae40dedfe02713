mod id;
mod title;

pub use self::{id::*, title::*};
use destructure::Destructure;
use vodca::References;

/// A catalog title that can be lent out.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle) -> Self {
        Self { id, title }
    }
}
