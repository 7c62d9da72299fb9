use super::*;

/// Tests prefix matching against channel names.
///
/// Registers `ticket` and `ticket-vip`; a `ticket-vip-0003` channel matches both
/// and the longer prefix must win.
///
/// Expected: Ok with the longest matching prefix
#[tokio::test]
async fn longest_prefix_wins() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    factory::ticket_type::TicketTypeFactory::new(db, guild.guild_id, "ticket")
        .build()
        .await?;
    factory::ticket_type::TicketTypeFactory::new(db, guild.guild_id, "ticket-vip")
        .ignore(true)
        .build()
        .await?;

    let repo = TicketTypeRepository::new(db);

    let vip = repo
        .match_channel(guild.guild_id as u64, "ticket-vip-0003")
        .await?
        .unwrap();
    assert_eq!(vip.prefix, "ticket-vip");
    assert!(vip.ignore);

    let plain = repo
        .match_channel(guild.guild_id as u64, "ticket-0004")
        .await?
        .unwrap();
    assert_eq!(plain.prefix, "ticket");

    Ok(())
}

/// Tests a channel name with no registered prefix.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    factory::ticket_type::TicketTypeFactory::new(db, guild.guild_id, "bug")
        .build()
        .await?;

    let matched = TicketTypeRepository::new(db)
        .match_channel(guild.guild_id as u64, "general")
        .await?;

    assert!(matched.is_none());

    Ok(())
}
