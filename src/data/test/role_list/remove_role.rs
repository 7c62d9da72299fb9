use super::*;

/// Tests purging a deleted role from every list.
///
/// Expected: Ok(2) with other roles kept
#[tokio::test]
async fn removes_role_from_all_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    factory::guild_role_list::add_role(db, guild.guild_id, "staff", 10).await?;
    factory::guild_role_list::add_role(db, guild.guild_id, "community_ping", 10).await?;
    factory::guild_role_list::add_role(db, guild.guild_id, "staff", 12).await?;

    let repo = RoleListRepository::new(db);

    assert_eq!(repo.remove_role(guild_id, 10).await?, 2);
    assert_eq!(repo.get_all(guild_id, RoleList::Staff).await?, vec![12]);
    assert!(repo
        .get_all(guild_id, RoleList::CommunityPing)
        .await?
        .is_empty());

    Ok(())
}
