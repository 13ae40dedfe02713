use driver::clock::ManualClock;
use driver::database::{
    InMemoryBookRepository, InMemoryBorrowRepository, InMemoryDatabase, InMemoryUserRepository,
    LedgerStore,
};
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{DependOnBookQuery, DependOnBorrowQuery, DependOnUserQuery};
use kernel::interface::update::DependOnBorrowModifier;
use time::OffsetDateTime;

/// Services wired to a seeded in-memory ledger and a hand-driven clock.
pub struct LedgerModule {
    database: InMemoryDatabase,
    pub clock: ManualClock,
}

impl LedgerModule {
    pub fn new(start: OffsetDateTime) -> Self {
        Self {
            database: InMemoryDatabase::new(LedgerStore::seeded()),
            clock: ManualClock::new(start),
        }
    }
}

impl DependOnDatabaseConnection for LedgerModule {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl DependOnClock for LedgerModule {
    type Clock = ManualClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnBorrowQuery for LedgerModule {
    type BorrowQuery = InMemoryBorrowRepository;
    fn borrow_query(&self) -> &Self::BorrowQuery {
        &InMemoryBorrowRepository
    }
}

impl DependOnBorrowModifier for LedgerModule {
    type BorrowModifier = InMemoryBorrowRepository;
    fn borrow_modifier(&self) -> &Self::BorrowModifier {
        &InMemoryBorrowRepository
    }
}

impl DependOnBookQuery for LedgerModule {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnUserQuery for LedgerModule {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &InMemoryUserRepository
    }
}
