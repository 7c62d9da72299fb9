use super::*;

/// Tests first reference to a guild.
///
/// Verifies that an unseen guild gets a configuration row populated with the
/// default open message, team name and toggles.
///
/// Expected: Ok with default settings persisted
#[tokio::test]
async fn creates_defaults_for_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let settings = repo.get_or_create(42).await?;

    assert_eq!(settings.guild_id, 42);
    assert_eq!(settings.open_message, "Staff notes for Ticket $channel.");
    assert_eq!(settings.staff_team_name, "Staff Team");
    assert!(settings.msg_discovery);
    assert!(!settings.strip_buttons);
    assert_eq!(settings.first_autoclose, None);
    assert_eq!(settings.support_block, None);

    let stored = entity::prelude::GuildConfig::find_by_id(42).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests reading an existing guild.
///
/// Verifies that get-or-create returns the stored row untouched instead of
/// resetting it to defaults.
///
/// Expected: Ok with the customised settings
#[tokio::test]
async fn returns_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(7)
        .staff_team_name("Moderators")
        .first_autoclose(Some(90))
        .build()
        .await?;

    let settings = GuildRepository::new(db).get_or_create(7).await?;

    assert_eq!(settings.staff_team_name, "Moderators");
    assert_eq!(settings.first_autoclose, Some(90));

    Ok(())
}

/// Tests looking up an unknown guild without creating it.
///
/// Expected: Ok(None) and no row inserted
#[tokio::test]
async fn find_does_not_create() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = GuildRepository::new(db).find(99).await?;

    assert!(found.is_none());
    assert!(entity::prelude::GuildConfig::find_by_id(99)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
