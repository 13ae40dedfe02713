use error_stack::Report;
use kernel::interface::query::BorrowQuery;
use kernel::interface::update::BorrowModifier;
use kernel::prelude::entity::{Borrow, BorrowId};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

pub struct InMemoryBorrowRepository;

#[async_trait::async_trait]
impl BorrowQuery for InMemoryBorrowRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BorrowId,
    ) -> error_stack::Result<Option<Borrow>, KernelError> {
        Ok(con.borrows.iter().find(|borrow| borrow.id() == id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Borrow>, KernelError> {
        Ok(con.borrows.clone())
    }
}

#[async_trait::async_trait]
impl BorrowModifier for InMemoryBorrowRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        borrow: &Borrow,
    ) -> error_stack::Result<(), KernelError> {
        if con.borrows.iter().any(|stored| stored.id() == borrow.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("duplicate borrow id {}", borrow.id().as_ref())));
        }
        con.borrows.push(borrow.clone());
        tracing::debug!(borrow_id = %borrow.id().as_ref(), "borrow record stored");
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        borrow: &Borrow,
    ) -> error_stack::Result<(), KernelError> {
        let stored = con
            .borrows
            .iter_mut()
            .find(|stored| stored.id() == borrow.id())
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("borrow {} is not stored", borrow.id().as_ref()))
            })?;
        *stored = borrow.clone();
        Ok(())
    }
}
