use super::*;

/// Tests toggling a flag twice.
///
/// Verifies that each toggle returns the new value and that two toggles restore
/// the original setting.
///
/// Expected: Ok(false) then Ok(true) for message discovery
#[tokio::test]
async fn toggling_twice_restores() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);

    assert!(!repo.toggle(1, GuildFlag::MsgDiscovery).await?);
    assert!(repo.toggle(1, GuildFlag::MsgDiscovery).await?);
    assert!(repo.get_or_create(1).await?.msg_discovery);

    Ok(())
}

/// Tests that toggles are scoped to one guild.
///
/// Expected: Ok with only the first guild's strip buttons flag changed
#[tokio::test]
async fn toggle_is_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    repo.get_or_create(2).await?;

    assert!(repo.toggle(1, GuildFlag::StripButtons).await?);

    assert!(repo.get_or_create(1).await?.strip_buttons);
    assert!(!repo.get_or_create(2).await?.strip_buttons);

    Ok(())
}
