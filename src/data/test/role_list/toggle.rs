use super::*;

/// Tests adding then removing a role.
///
/// Verifies that the first toggle adds the role, the second removes it, and the
/// list ends up as it started.
///
/// Expected: Added then Removed with an empty list afterwards
#[tokio::test]
async fn add_then_remove_restores_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    let repo = RoleListRepository::new(db);

    assert_eq!(
        repo.toggle(guild_id, RoleList::Staff, 10).await?,
        ToggleOutcome::Added
    );
    assert_eq!(repo.get_all(guild_id, RoleList::Staff).await?, vec![10]);

    assert_eq!(
        repo.toggle(guild_id, RoleList::Staff, 10).await?,
        ToggleOutcome::Removed
    );
    assert!(repo.get_all(guild_id, RoleList::Staff).await?.is_empty());

    Ok(())
}

/// Tests that lists are independent of each other.
///
/// Verifies that the same role can sit in two lists and toggling one list does
/// not affect the other.
///
/// Expected: Ok with the role remaining in observers
#[tokio::test]
async fn lists_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    factory::guild_role_list::add_role(db, guild.guild_id, "staff", 10).await?;
    factory::guild_role_list::add_role(db, guild.guild_id, "observers", 10).await?;

    let repo = RoleListRepository::new(db);
    repo.toggle(guild_id, RoleList::Staff, 10).await?;

    assert!(repo.get_all(guild_id, RoleList::Staff).await?.is_empty());
    assert_eq!(repo.get_all(guild_id, RoleList::Observers).await?, vec![10]);

    Ok(())
}
