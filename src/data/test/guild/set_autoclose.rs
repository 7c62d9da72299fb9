use super::*;

/// Tests setting each autoclose interval.
///
/// Verifies that the three intervals are stored in separate columns and do not
/// overwrite each other.
///
/// Expected: Ok with each interval stored independently
#[tokio::test]
async fn stores_intervals_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    repo.set_autoclose(1, AutocloseKind::FirstResponse, Some(60)).await?;
    repo.set_autoclose(1, AutocloseKind::AnyResponse, Some(1440)).await?;
    repo.set_autoclose(1, AutocloseKind::Warning, Some(30)).await?;

    let settings = repo.get_or_create(1).await?;
    assert_eq!(settings.first_autoclose, Some(60));
    assert_eq!(settings.any_autoclose, Some(1440));
    assert_eq!(settings.warn_autoclose, Some(30));

    Ok(())
}

/// Tests disabling an interval.
///
/// Verifies that setting `None` clears the interval and reports the old value.
///
/// Expected: Ok(Some(60)) and the interval disabled
#[tokio::test]
async fn none_disables_and_returns_previous() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(1)
        .first_autoclose(Some(60))
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let previous = repo.set_autoclose(1, AutocloseKind::FirstResponse, None).await?;

    assert_eq!(previous, Some(60));
    assert_eq!(repo.get_or_create(1).await?.first_autoclose, None);

    Ok(())
}
