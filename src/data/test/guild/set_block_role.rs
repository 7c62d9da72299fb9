use super::*;

/// Tests setting and unsetting penalty roles.
///
/// Verifies that support and helping block roles are stored separately and that
/// unsetting returns the previous role.
///
/// Expected: Ok with roles stored then cleared
#[tokio::test]
async fn sets_and_unsets_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);

    assert_eq!(repo.set_block_role(1, BlockKind::Support, Some(500)).await?, None);
    assert_eq!(repo.set_block_role(1, BlockKind::Helping, Some(600)).await?, None);

    let settings = repo.get_or_create(1).await?;
    assert_eq!(settings.support_block, Some(500));
    assert_eq!(settings.helping_block, Some(600));

    assert_eq!(repo.set_block_role(1, BlockKind::Support, None).await?, Some(500));
    let settings = repo.get_or_create(1).await?;
    assert_eq!(settings.support_block, None);
    assert_eq!(settings.helping_block, Some(600));

    Ok(())
}
