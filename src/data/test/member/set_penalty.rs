use super::*;

/// Tests recording a timed penalty.
///
/// Expected: Ok with status and expiry stored
#[tokio::test]
async fn stores_penalty_and_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    let till = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();

    let repo = MemberRepository::new(db);
    repo.set_penalty(guild.guild_id as u64, 77, BlockKind::Support, Some(till))
        .await?;

    let member = repo.get_or_create(guild.guild_id as u64, 77).await?;
    assert_eq!(member.penalty, Some(BlockKind::Support));
    assert_eq!(member.penalty_till, Some(till));

    Ok(())
}

/// Tests replacing an existing penalty.
///
/// Expected: Ok with the new kind and a permanent duration
#[tokio::test]
async fn replaces_previous_penalty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    factory::member::MemberFactory::new(db, guild.guild_id)
        .user_id(77)
        .status(1)
        .status_till(Some(Utc::now()))
        .build()
        .await?;

    let member = MemberRepository::new(db)
        .set_penalty(guild.guild_id as u64, 77, BlockKind::Helping, None)
        .await?;

    assert_eq!(member.penalty, Some(BlockKind::Helping));
    assert_eq!(member.penalty_till, None);

    Ok(())
}
