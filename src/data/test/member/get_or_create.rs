use super::*;

/// Tests first reference to a member.
///
/// Expected: Ok with a member carrying no penalty
#[tokio::test]
async fn creates_clean_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    let member = MemberRepository::new(db)
        .get_or_create(guild.guild_id as u64, 77)
        .await?;

    assert_eq!(member.user_id, 77);
    assert_eq!(member.penalty, None);
    assert_eq!(member.penalty_till, None);

    Ok(())
}

/// Tests reading an existing penalised member.
///
/// Expected: Ok with the stored helping block
#[tokio::test]
async fn returns_existing_penalty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    factory::member::MemberFactory::new(db, guild.guild_id)
        .user_id(77)
        .status(2)
        .build()
        .await?;

    let member = MemberRepository::new(db)
        .get_or_create(guild.guild_id as u64, 77)
        .await?;

    assert_eq!(member.penalty, Some(BlockKind::Helping));

    Ok(())
}

/// Tests that members are scoped per guild.
///
/// Expected: Ok with the second guild's record clean
#[tokio::test]
async fn members_are_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::guild_config::create_guild(db).await?;
    let second = factory::guild_config::create_guild(db).await?;
    factory::member::MemberFactory::new(db, first.guild_id)
        .user_id(77)
        .status(1)
        .build()
        .await?;

    let member = MemberRepository::new(db)
        .get_or_create(second.guild_id as u64, 77)
        .await?;

    assert_eq!(member.penalty, None);

    Ok(())
}
