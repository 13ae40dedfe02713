use driver::clock::SystemClock;
use driver::database::{
    InMemoryBookRepository, InMemoryBorrowRepository, InMemoryDatabase, InMemoryUserRepository,
    LedgerStore,
};
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{DependOnBookQuery, DependOnBorrowQuery, DependOnUserQuery};
use kernel::interface::update::DependOnBorrowModifier;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;

pub struct AppModule<C: Clock = SystemClock>(Arc<Handler<C>>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init()?)))
    }
}

impl<C: Clock> AppModule<C> {
    pub fn with_handler(handler: Handler<C>) -> Self {
        Self(Arc::new(handler))
    }
}

impl<C: Clock> Clone for AppModule<C> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<C: Clock> Deref for AppModule<C> {
    type Target = Handler<C>;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

/// Owns the ledger for the lifetime of the process.
pub struct Handler<C: Clock = SystemClock> {
    database: InMemoryDatabase,
    clock: C,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let clock = SystemClock::from_env()?;
        Ok(Self::new(InMemoryDatabase::new(LedgerStore::seeded()), clock))
    }
}

impl<C: Clock> Handler<C> {
    pub fn new(database: InMemoryDatabase, clock: C) -> Self {
        Self { database, clock }
    }
}

impl<C: Clock> DependOnDatabaseConnection for Handler<C> {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl<C: Clock> DependOnClock for Handler<C> {
    type Clock = C;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl<C: Clock> DependOnBorrowQuery for Handler<C> {
    type BorrowQuery = InMemoryBorrowRepository;
    fn borrow_query(&self) -> &Self::BorrowQuery {
        &InMemoryBorrowRepository
    }
}

impl<C: Clock> DependOnBorrowModifier for Handler<C> {
    type BorrowModifier = InMemoryBorrowRepository;
    fn borrow_modifier(&self) -> &Self::BorrowModifier {
        &InMemoryBorrowRepository
    }
}

impl<C: Clock> DependOnBookQuery for Handler<C> {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl<C: Clock> DependOnUserQuery for Handler<C> {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &InMemoryUserRepository
    }
}
