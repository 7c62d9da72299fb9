use super::*;

/// Tests persisting a new ticket.
///
/// Verifies that the ticket starts non-anonymous and un-notified with the open
/// time as its last response.
///
/// Expected: Ok with the ticket stored
#[tokio::test]
async fn creates_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    let opened_at = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();

    let ticket = TicketRepository::new(db)
        .create(CreateTicketParam {
            channel_id: 900,
            guild_id: guild.guild_id as u64,
            staff_note_thread: Some(901),
            opened_at,
        })
        .await?;

    assert_eq!(ticket.channel_id, 900);
    assert_eq!(ticket.staff_note_thread, Some(901));
    assert!(!ticket.anonymous);
    assert!(!ticket.notified);
    assert_eq!(ticket.last_response, opened_at);

    Ok(())
}

/// Tests creating a ticket for a channel that is already tracked.
///
/// Verifies that the existing row is returned unchanged.
///
/// Expected: Ok with the original ticket's thread and anonymity
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id)
        .channel_id(900)
        .staff_note_thread(Some(1))
        .anonymous(true)
        .build()
        .await?;

    let ticket = TicketRepository::new(db)
        .create(CreateTicketParam {
            channel_id: 900,
            guild_id: guild.guild_id as u64,
            staff_note_thread: Some(2),
            opened_at: Utc::now(),
        })
        .await?;

    assert_eq!(ticket.staff_note_thread, Some(1));
    assert!(ticket.anonymous);

    Ok(())
}
