use std::collections::HashSet;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, BorrowQuery, DependOnBookQuery, DependOnBorrowQuery};
use kernel::KernelError;

use crate::transfer::BookDto;

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery + DependOnBorrowQuery {
    /// Catalog titles with no open loan against them.
    async fn get_available(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let lent = self
            .borrow_query()
            .find_all(&mut connection)
            .await?
            .into_iter()
            .filter(|borrow| borrow.is_open())
            .map(|borrow| *borrow.book_id())
            .collect::<HashSet<_>>();
        let books = self.book_query().find_all(&mut connection).await?;

        connection.commit().await?;

        Ok(books
            .into_iter()
            .filter(|book| !lent.contains(book.id()))
            .map(BookDto::from)
            .collect())
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery + DependOnBorrowQuery {}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use kernel::KernelError;

    use crate::service::{BorrowService, GetBookService, ReturnService};
    use crate::testing::LedgerModule;
    use crate::transfer::{CreateBorrowDto, ReturnBorrowDto};

    #[tokio::test]
    async fn open_loans_hide_titles() -> error_stack::Result<(), KernelError> {
        let module = LedgerModule::new(datetime!(2024-03-01 10:00 +7));
        let ids = |books: Vec<crate::transfer::BookDto>| {
            books.into_iter().map(|book| book.id).collect::<Vec<_>>()
        };
        assert_eq!(ids(module.get_available().await?), vec![101, 102]);

        let borrowed = module
            .borrow_book(CreateBorrowDto {
                user_id: 1,
                book_id: 101,
            })
            .await?;
        assert_eq!(ids(module.get_available().await?), vec![102]);

        // Lending the same title twice is allowed; it stays hidden until both are back.
        let again = module
            .borrow_book(CreateBorrowDto {
                user_id: 2,
                book_id: 101,
            })
            .await?;
        module
            .return_book(ReturnBorrowDto {
                borrow_id: borrowed.borrow_id,
            })
            .await?;
        assert_eq!(ids(module.get_available().await?), vec![102]);

        module
            .return_book(ReturnBorrowDto {
                borrow_id: again.borrow_id,
            })
            .await?;
        assert_eq!(ids(module.get_available().await?), vec![101, 102]);
        Ok(())
    }
}
