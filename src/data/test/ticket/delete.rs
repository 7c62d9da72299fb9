use super::*;

/// Tests deleting a tracked ticket.
///
/// Expected: Ok(true) then the ticket is gone
#[tokio::test]
async fn deletes_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, ticket) = factory::helpers::create_guild_with_ticket(db).await?;
    let repo = TicketRepository::new(db);

    assert!(repo.delete(ticket.channel_id as u64).await?);
    assert!(repo.find_by_channel_id(ticket.channel_id as u64).await?.is_none());

    Ok(())
}

/// Tests deleting a channel that was never a ticket.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_unknown_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!TicketRepository::new(db).delete(404).await?);

    Ok(())
}
