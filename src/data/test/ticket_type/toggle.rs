use super::*;

fn param(guild_id: u64, prefix: &str) -> ToggleTicketTypeParam {
    ToggleTicketTypeParam {
        guild_id,
        prefix: prefix.to_string(),
        community_ping: false,
        community_access: true,
        strip_buttons: true,
        ignore: false,
    }
}

/// Tests creating then removing a ticket type.
///
/// Verifies that the flags passed on creation are stored and that toggling the
/// same prefix again removes it.
///
/// Expected: Added with flags stored, then Removed
#[tokio::test]
async fn creates_then_removes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    let repo = TicketTypeRepository::new(db);

    assert_eq!(repo.toggle(param(guild_id, "bug")).await?, ToggleOutcome::Added);

    let types = repo.get_all(guild_id).await?;
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].prefix, "bug");
    assert!(!types[0].community_ping);
    assert!(types[0].community_access);

    assert_eq!(repo.toggle(param(guild_id, "bug")).await?, ToggleOutcome::Removed);
    assert!(repo.get_all(guild_id).await?.is_empty());

    Ok(())
}
