use error_stack::Report;
use uuid::Uuid;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BorrowQuery, DependOnBorrowQuery};
use kernel::interface::update::{BorrowModifier, DependOnBorrowModifier};
use kernel::prelude::entity::{BookId, Borrow, BorrowId, BorrowedAt, RenewedAt, ReturnedAt, UserId};
use kernel::KernelError;

use crate::transfer::{
    BorrowDto, CreateBorrowDto, GetLateFeeDto, LateFeeDto, RenewBorrowDto, ReturnBorrowDto,
};

#[async_trait::async_trait]
pub trait BorrowService: 'static + Sync + Send + DependOnClock + DependOnBorrowModifier {
    async fn borrow_book(
        &self,
        dto: CreateBorrowDto,
    ) -> error_stack::Result<BorrowDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let borrow = Borrow::open(
            BorrowId::new(Uuid::new_v4()),
            UserId::new(dto.user_id),
            BookId::new(dto.book_id),
            BorrowedAt::new(self.clock().now()),
        );
        self.borrow_modifier()
            .create(&mut connection, &borrow)
            .await?;

        connection.commit().await?;

        tracing::info!(
            borrow_id = %borrow.id().as_ref(),
            user_id = dto.user_id,
            book_id = dto.book_id,
            "book borrowed"
        );
        Ok(BorrowDto::from(borrow))
    }
}

impl<T> BorrowService for T where T: DependOnClock + DependOnBorrowModifier {}

#[async_trait::async_trait]
pub trait ReturnService:
    'static + Sync + Send + DependOnClock + DependOnBorrowQuery + DependOnBorrowModifier
{
    async fn return_book(
        &self,
        dto: ReturnBorrowDto,
    ) -> error_stack::Result<BorrowDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BorrowId::new(dto.borrow_id);
        let mut borrow = self
            .borrow_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No borrow record {}", dto.borrow_id))
            })?;

        borrow.close(ReturnedAt::new(self.clock().now()))?;
        self.borrow_modifier()
            .update(&mut connection, &borrow)
            .await?;

        connection.commit().await?;

        tracing::info!(borrow_id = %dto.borrow_id, "book returned");
        Ok(BorrowDto::from(borrow))
    }
}

impl<T> ReturnService for T where
    T: DependOnClock + DependOnBorrowQuery + DependOnBorrowModifier
{
}

#[async_trait::async_trait]
pub trait RenewService:
    'static + Sync + Send + DependOnClock + DependOnBorrowQuery + DependOnBorrowModifier
{
    /// Stamps the renewal time on an open record. The due date does not move.
    async fn renew_book(
        &self,
        dto: RenewBorrowDto,
    ) -> error_stack::Result<BorrowDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BorrowId::new(dto.borrow_id);
        let mut borrow = self
            .borrow_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No borrow record {}", dto.borrow_id))
            })?;

        borrow.renew(RenewedAt::new(self.clock().now()))?;
        self.borrow_modifier()
            .update(&mut connection, &borrow)
            .await?;

        connection.commit().await?;

        tracing::info!(borrow_id = %dto.borrow_id, "book renewed");
        Ok(BorrowDto::from(borrow))
    }
}

impl<T> RenewService for T where
    T: DependOnClock + DependOnBorrowQuery + DependOnBorrowModifier
{
}

#[async_trait::async_trait]
pub trait GetBorrowService: 'static + Sync + Send + DependOnClock + DependOnBorrowQuery {
    async fn get_history(&self) -> error_stack::Result<Vec<BorrowDto>, KernelError> {
        collect_borrows(self, |_| true).await
    }

    async fn get_borrowed(&self) -> error_stack::Result<Vec<BorrowDto>, KernelError> {
        collect_borrows(self, Borrow::is_open).await
    }

    /// Same records as [`GetBorrowService::get_borrowed`], kept as its own query.
    async fn get_unreturned(&self) -> error_stack::Result<Vec<BorrowDto>, KernelError> {
        collect_borrows(self, Borrow::is_open).await
    }

    async fn get_overdue(&self) -> error_stack::Result<Vec<BorrowDto>, KernelError> {
        let now = self.clock().now();
        collect_borrows(self, move |borrow| borrow.is_overdue(&now)).await
    }

    async fn get_late_fee(
        &self,
        dto: GetLateFeeDto,
    ) -> error_stack::Result<LateFeeDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BorrowId::new(dto.borrow_id);
        let now = self.clock().now();
        let fee = self
            .borrow_query()
            .find_by_id(&mut connection, &id)
            .await?
            .and_then(|borrow| borrow.late_fee(&now))
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Borrow {} is not overdue", dto.borrow_id))
            })?;

        connection.commit().await?;

        Ok(LateFeeDto::new(id, fee))
    }
}

impl<T> GetBorrowService for T where T: DependOnClock + DependOnBorrowQuery {}

async fn collect_borrows<S, F>(
    service: &S,
    filter: F,
) -> error_stack::Result<Vec<BorrowDto>, KernelError>
where
    S: DependOnBorrowQuery + ?Sized,
    F: Fn(&Borrow) -> bool + Send,
{
    let mut connection = service.database_connection().transact().await?;

    let borrows = service.borrow_query().find_all(&mut connection).await?;

    connection.commit().await?;

    let borrows = borrows
        .into_iter()
        .filter(|borrow| filter(borrow))
        .map(BorrowDto::from)
        .collect::<Vec<_>>();
    tracing::debug!(count = borrows.len(), "borrow records listed");
    Ok(borrows)
}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use time::Duration;
    use uuid::Uuid;

    use kernel::prelude::entity::LATE_FEE_PER_DAY;
    use kernel::KernelError;

    use crate::service::{BorrowService, GetBorrowService, RenewService, ReturnService};
    use crate::testing::LedgerModule;
    use crate::transfer::{CreateBorrowDto, GetLateFeeDto, RenewBorrowDto, ReturnBorrowDto};

    fn create(user_id: i64, book_id: i64) -> CreateBorrowDto {
        CreateBorrowDto { user_id, book_id }
    }

    #[tokio::test]
    async fn borrow_then_return() -> error_stack::Result<(), KernelError> {
        let t0 = datetime!(2024-03-01 10:00 +7);
        let module = LedgerModule::new(t0);

        let borrowed = module.borrow_book(create(1, 101)).await?;
        assert_eq!(borrowed.borrowed_at, t0);
        assert_eq!(borrowed.due_at, t0 + Duration::days(3));
        assert!(borrowed.returned_at.is_none());

        module.clock.advance(Duration::days(1));
        let returned = module
            .return_book(ReturnBorrowDto {
                borrow_id: borrowed.borrow_id,
            })
            .await?;
        assert_eq!(returned.returned_at, Some(t0 + Duration::days(1)));
        assert!(returned.returned_at.unwrap() >= returned.borrowed_at);

        module.clock.advance(Duration::hours(2));
        let err = module
            .return_book(ReturnBorrowDto {
                borrow_id: borrowed.borrow_id,
            })
            .await
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::AlreadyClosed);

        let history = module.get_history().await?;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].returned_at, Some(t0 + Duration::days(1)));
        Ok(())
    }

    #[tokio::test]
    async fn borrow_ids_are_unique() -> error_stack::Result<(), KernelError> {
        let module = LedgerModule::new(datetime!(2024-03-01 10:00 +7));
        let mut ids = Vec::new();
        for _ in 0..20 {
            ids.push(module.borrow_book(create(1, 101)).await?.borrow_id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        Ok(())
    }

    #[tokio::test]
    async fn return_unknown_is_not_found() {
        let module = LedgerModule::new(datetime!(2024-03-01 10:00 +7));
        let err = module
            .return_book(ReturnBorrowDto {
                borrow_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::NotFound);
    }

    #[tokio::test]
    async fn renew_open_and_closed() -> error_stack::Result<(), KernelError> {
        let t0 = datetime!(2024-03-01 10:00 +7);
        let module = LedgerModule::new(t0);
        let borrowed = module.borrow_book(create(2, 102)).await?;

        module.clock.advance(Duration::days(2));
        let renewed = module
            .renew_book(RenewBorrowDto {
                borrow_id: borrowed.borrow_id,
            })
            .await?;
        assert_eq!(renewed.renewed_at, Some(t0 + Duration::days(2)));
        assert_eq!(renewed.due_at, borrowed.due_at);
        assert!(renewed.returned_at.is_none());

        module
            .return_book(ReturnBorrowDto {
                borrow_id: borrowed.borrow_id,
            })
            .await?;
        let err = module
            .renew_book(RenewBorrowDto {
                borrow_id: borrowed.borrow_id,
            })
            .await
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::AlreadyClosed);

        let err = module
            .renew_book(RenewBorrowDto {
                borrow_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn listings_follow_open_state() -> error_stack::Result<(), KernelError> {
        let module = LedgerModule::new(datetime!(2024-03-01 10:00 +7));
        let first = module.borrow_book(create(1, 101)).await?;
        let second = module.borrow_book(create(2, 102)).await?;
        module
            .return_book(ReturnBorrowDto {
                borrow_id: first.borrow_id,
            })
            .await?;

        let history = module
            .get_history()
            .await?
            .into_iter()
            .map(|borrow| borrow.borrow_id)
            .collect::<Vec<_>>();
        assert_eq!(history, vec![first.borrow_id, second.borrow_id]);

        let borrowed = module.get_borrowed().await?;
        let unreturned = module.get_unreturned().await?;
        assert_eq!(borrowed, unreturned);
        assert_eq!(borrowed.len(), 1);
        assert_eq!(borrowed[0].borrow_id, second.borrow_id);
        Ok(())
    }

    #[tokio::test]
    async fn overdue_and_late_fee() -> error_stack::Result<(), KernelError> {
        let t0 = datetime!(2024-03-01 10:00 +7);
        let module = LedgerModule::new(t0);
        let kept = module.borrow_book(create(1, 101)).await?;
        let returned = module.borrow_book(create(2, 102)).await?;
        module
            .return_book(ReturnBorrowDto {
                borrow_id: returned.borrow_id,
            })
            .await?;

        module.clock.advance(Duration::days(3));
        assert!(module.get_overdue().await?.is_empty());
        let err = module
            .get_late_fee(GetLateFeeDto {
                borrow_id: kept.borrow_id,
            })
            .await
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::NotFound);

        module.clock.set(t0 + Duration::days(4));
        let overdue = module.get_overdue().await?;
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].borrow_id, kept.borrow_id);

        let fee = module
            .get_late_fee(GetLateFeeDto {
                borrow_id: kept.borrow_id,
            })
            .await?;
        assert_eq!(fee.days_late, 1);
        assert_eq!(fee.amount, LATE_FEE_PER_DAY);

        module.clock.set(t0 + Duration::days(5) + Duration::hours(12));
        let fee = module
            .get_late_fee(GetLateFeeDto {
                borrow_id: kept.borrow_id,
            })
            .await?;
        assert_eq!(fee.amount, 3 * LATE_FEE_PER_DAY);

        let err = module
            .get_late_fee(GetLateFeeDto {
                borrow_id: returned.borrow_id,
            })
            .await
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::NotFound);
        Ok(())
    }
}
