use super::*;

/// Tests selecting tickets due an inactivity warning.
///
/// Creates one idle ticket, one recently active ticket and one idle ticket that
/// was already warned in a guild with a 60 minute warning interval.
///
/// Expected: Ok with only the idle, un-warned ticket
#[tokio::test]
async fn returns_idle_unwarned_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    let guild = factory::guild_config::GuildConfigFactory::new(db)
        .warn_autoclose(Some(60))
        .build()
        .await?;

    let idle = factory::ticket::TicketFactory::new(db, guild.guild_id)
        .last_response(now - Duration::hours(2))
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id)
        .last_response(now - Duration::minutes(10))
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id)
        .last_response(now - Duration::hours(3))
        .notified(true)
        .build()
        .await?;

    let due = TicketRepository::new(db).get_needing_warning(now).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].channel_id, idle.channel_id as u64);

    Ok(())
}

/// Tests that guilds without a warning interval are skipped.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn skips_guilds_without_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    let guild = factory::guild_config::create_guild(db).await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id)
        .last_response(now - Duration::days(30))
        .build()
        .await?;

    let due = TicketRepository::new(db).get_needing_warning(now).await?;

    assert!(due.is_empty());

    Ok(())
}

/// Tests that a warned ticket is not selected again.
///
/// Expected: Ok with an empty list after `mark_notified`
#[tokio::test]
async fn mark_notified_excludes_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    let guild = factory::guild_config::GuildConfigFactory::new(db)
        .warn_autoclose(Some(60))
        .build()
        .await?;
    let ticket = factory::ticket::TicketFactory::new(db, guild.guild_id)
        .last_response(now - Duration::hours(2))
        .build()
        .await?;

    let repo = TicketRepository::new(db);
    repo.mark_notified(ticket.channel_id as u64).await?;

    assert!(repo.get_needing_warning(now).await?.is_empty());

    Ok(())
}

/// Tests that a guild with an out-of-range interval does not stop the sweep.
///
/// Stores `i64::MAX` minutes for one guild, which no date can be offset by, and a
/// 60 minute interval for another guild with an idle ticket.
///
/// Expected: Ok with only the other guild's idle ticket
#[tokio::test]
async fn skips_out_of_range_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    let broken = factory::guild_config::GuildConfigFactory::new(db)
        .warn_autoclose(Some(i64::MAX))
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, broken.guild_id)
        .last_response(now - Duration::days(30))
        .build()
        .await?;

    let guild = factory::guild_config::GuildConfigFactory::new(db)
        .warn_autoclose(Some(60))
        .build()
        .await?;
    let idle = factory::ticket::TicketFactory::new(db, guild.guild_id)
        .last_response(now - Duration::hours(2))
        .build()
        .await?;

    let due = TicketRepository::new(db).get_needing_warning(now).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].channel_id, idle.channel_id as u64);

    Ok(())
}
