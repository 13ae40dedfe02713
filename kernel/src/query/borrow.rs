use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Borrow, BorrowId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BorrowQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &BorrowId,
    ) -> error_stack::Result<Option<Borrow>, KernelError>;

    /// All records in the order they were created.
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Borrow>, KernelError>;
}

pub trait DependOnBorrowQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BorrowQuery: BorrowQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn borrow_query(&self) -> &Self::BorrowQuery;
}
