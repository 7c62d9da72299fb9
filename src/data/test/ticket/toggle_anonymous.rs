use super::*;

/// Tests toggling anonymous mode.
///
/// Expected: Ok(Some(true)) then Ok(Some(false))
#[tokio::test]
async fn toggles_anonymous_mode() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, ticket) = factory::helpers::create_guild_with_ticket(db).await?;
    let repo = TicketRepository::new(db);
    let channel_id = ticket.channel_id as u64;

    assert_eq!(repo.toggle_anonymous(channel_id).await?, Some(true));
    assert_eq!(repo.toggle_anonymous(channel_id).await?, Some(false));

    Ok(())
}

/// Tests toggling anonymous mode outside a ticket.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_outside_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(TicketRepository::new(db).toggle_anonymous(404).await?, None);

    Ok(())
}
