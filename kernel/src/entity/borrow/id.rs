use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct BorrowId(Uuid);

impl BorrowId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
