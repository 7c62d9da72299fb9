use super::*;

/// Tests registering then unregistering a ticket bot.
///
/// Expected: Added then Removed
#[tokio::test]
async fn toggles_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    let repo = TicketBotRepository::new(db);

    assert_eq!(repo.toggle(guild_id, 557628352828014614).await?, ToggleOutcome::Added);
    assert!(repo.is_ticket_bot(guild_id, 557628352828014614).await?);

    assert_eq!(repo.toggle(guild_id, 557628352828014614).await?, ToggleOutcome::Removed);
    assert!(!repo.is_ticket_bot(guild_id, 557628352828014614).await?);

    Ok(())
}
