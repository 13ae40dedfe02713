use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Book, BookId, BookTitle, Borrow, User, UserId, UserName};
use kernel::KernelError;
use tokio::sync::{OwnedRwLockWriteGuard, RwLock};

pub use self::{book::*, borrow::*, user::*};

mod book;
mod borrow;
mod user;

/// Everything the ledger knows, kept for the lifetime of the process.
#[derive(Debug, Default)]
pub struct LedgerStore {
    users: Vec<User>,
    books: Vec<Book>,
    borrows: Vec<Borrow>,
}

impl LedgerStore {
    pub fn new(users: Vec<User>, books: Vec<Book>) -> Self {
        Self {
            users,
            books,
            borrows: Vec::new(),
        }
    }

    /// The members and titles the desk starts with.
    pub fn seeded() -> Self {
        Self::new(
            vec![
                User::new(UserId::new(1), UserName::new("User1")),
                User::new(UserId::new(2), UserName::new("User2")),
            ],
            vec![
                Book::new(BookId::new(101), BookTitle::new("Book1")),
                Book::new(BookId::new(102), BookTitle::new("Book2")),
            ],
        )
    }
}

#[derive(Clone)]
pub struct InMemoryDatabase {
    store: Arc<RwLock<LedgerStore>>,
}

impl InMemoryDatabase {
    pub fn new(store: LedgerStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let guard = Arc::clone(&self.store).write_owned().await;
        Ok(InMemoryTransaction(guard))
    }
}

/// Holds the write lock, so operations never interleave.
pub struct InMemoryTransaction(OwnedRwLockWriteGuard<LedgerStore>);

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl Deref for InMemoryTransaction {
    type Target = LedgerStore;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

impl DerefMut for InMemoryTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        DerefMut::deref_mut(&mut self.0)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use kernel::interface::database::{DatabaseConnection, Transaction};

    use crate::database::{InMemoryDatabase, LedgerStore};

    #[tokio::test]
    async fn transactions_are_exclusive() {
        let db = InMemoryDatabase::new(LedgerStore::default());
        let con = db.transact().await.unwrap();

        let other = db.clone();
        let waiting = tokio::spawn(async move { other.transact().await.map(|_| ()) });
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiting.is_finished());

        con.commit().await.unwrap();
        waiting.await.unwrap().unwrap();
    }
}
