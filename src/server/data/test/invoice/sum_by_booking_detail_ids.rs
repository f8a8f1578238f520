use super::*;

/// Tests that the sum only counts live invoices of the requested details.
///
/// Expected: Ok with the price of the remaining invoice
#[tokio::test]
async fn sums_live_invoices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let (kept, _) = factory::booking::BookingDetailFactory::new(db, user.id, room.id)
        .total_price(120_000.0)
        .build()
        .await?;
    let (removed, _) = factory::booking::BookingDetailFactory::new(db, user.id, room.id)
        .total_price(80_000.0)
        .build()
        .await?;
    let (other, _) = factory::booking::BookingDetailFactory::new(db, user.id, room.id)
        .total_price(55_000.0)
        .build()
        .await?;

    let repo = InvoiceRepository::new(db);
    repo.soft_delete_by_booking_detail_ids(vec![removed.id])
        .await?;

    let total = repo
        .sum_by_booking_detail_ids(vec![kept.id, removed.id])
        .await?;
    assert_eq!(total, 120_000.0);

    repo.update_price(other.id, 60_000.0).await?;
    assert_eq!(repo.sum_by_booking_detail_ids(vec![other.id]).await?, 60_000.0);

    Ok(())
}
