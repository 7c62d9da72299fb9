use super::*;

/// Tests clearing a deleted role from the penalty settings.
///
/// Verifies that only the column pointing at the deleted role is reset.
///
/// Expected: Ok with support block cleared and helping block kept
#[tokio::test]
async fn clears_matching_block_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(1)
        .support_block(Some(500))
        .helping_block(Some(600))
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    repo.clear_role(1, 500).await?;

    let settings = repo.get_or_create(1).await?;
    assert_eq!(settings.support_block, None);
    assert_eq!(settings.helping_block, Some(600));

    Ok(())
}

/// Tests clearing a role in a guild that has never been configured.
///
/// Expected: Ok without creating a configuration row
#[tokio::test]
async fn ignores_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    repo.clear_role(1, 500).await?;

    assert!(repo.find(1).await?.is_none());

    Ok(())
}
