use super::*;

/// Tests that ticket bot registration is scoped per guild.
///
/// Expected: true in the registering guild, false elsewhere
#[tokio::test]
async fn scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::guild_config::create_guild(db).await?;
    let second = factory::guild_config::create_guild(db).await?;
    factory::ticket_bot::create_ticket_bot(db, first.guild_id, 20).await?;

    let repo = TicketBotRepository::new(db);

    assert!(repo.is_ticket_bot(first.guild_id as u64, 20).await?);
    assert!(!repo.is_ticket_bot(second.guild_id as u64, 20).await?);

    Ok(())
}
