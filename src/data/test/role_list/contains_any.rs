use super::*;

/// Tests checking a member's roles against the staff list.
///
/// Expected: true when one role matches, false otherwise
#[tokio::test]
async fn matches_any_listed_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    factory::guild_role_list::add_role(db, guild.guild_id, "staff", 10).await?;
    factory::guild_role_list::add_role(db, guild.guild_id, "community", 11).await?;

    let repo = RoleListRepository::new(db);

    assert!(repo.contains_any(guild_id, RoleList::Staff, &[3, 10]).await?);
    assert!(!repo.contains_any(guild_id, RoleList::Staff, &[11]).await?);
    assert!(!repo.contains_any(guild_id, RoleList::Staff, &[]).await?);

    Ok(())
}

/// Tests that staff roles of one guild do not grant staff in another.
///
/// Expected: false for the second guild
#[tokio::test]
async fn scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::guild_config::create_guild(db).await?;
    let second = factory::guild_config::create_guild(db).await?;
    factory::guild_role_list::add_role(db, first.guild_id, "staff", 10).await?;

    let contains = RoleListRepository::new(db)
        .contains_any(second.guild_id as u64, RoleList::Staff, &[10])
        .await?;

    assert!(!contains);

    Ok(())
}
