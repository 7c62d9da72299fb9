use super::*;

/// Tests recording a response in a warned ticket.
///
/// Verifies that the last response moves forward and the warning flag is reset
/// so the ticket can be warned again later.
///
/// Expected: Ok(true) with notified cleared
#[tokio::test]
async fn updates_time_and_resets_warning() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    let ticket = factory::ticket::TicketFactory::new(db, guild.guild_id)
        .last_response(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap())
        .notified(true)
        .build()
        .await?;

    let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 30, 0).unwrap();
    let repo = TicketRepository::new(db);

    assert!(repo.record_response(ticket.channel_id as u64, at).await?);

    let updated = repo
        .find_by_channel_id(ticket.channel_id as u64)
        .await?
        .unwrap();
    assert_eq!(updated.last_response, at);
    assert!(!updated.notified);

    Ok(())
}

/// Tests recording a message in a channel that is not a ticket.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_non_ticket_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!TicketRepository::new(db)
        .record_response(404, Utc::now())
        .await?);

    Ok(())
}
