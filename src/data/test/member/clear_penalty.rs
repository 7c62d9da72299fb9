use super::*;

/// Tests clearing a penalty.
///
/// Expected: Ok with status and expiry reset
#[tokio::test]
async fn clears_penalty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_config::create_guild(db).await?;
    factory::member::MemberFactory::new(db, guild.guild_id)
        .user_id(77)
        .status(2)
        .status_till(Some(Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap()))
        .build()
        .await?;

    let member = MemberRepository::new(db)
        .clear_penalty(guild.guild_id as u64, 77)
        .await?;

    assert_eq!(member.penalty, None);
    assert_eq!(member.penalty_till, None);

    Ok(())
}
