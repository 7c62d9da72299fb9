use super::*;

/// Tests removing a guild and everything it owns.
///
/// Verifies that tickets, members, role lists, ticket bots and ticket types are
/// deleted with the configuration while other guilds are untouched.
///
/// Expected: Ok(true) and no rows left for the deleted guild
#[tokio::test]
async fn deletes_guild_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _) = factory::helpers::create_guild_with_ticket(db).await?;
    factory::member::MemberFactory::new(db, guild.guild_id).build().await?;
    factory::guild_role_list::add_role(db, guild.guild_id, "staff", 10).await?;
    factory::ticket_bot::create_ticket_bot(db, guild.guild_id, 20).await?;
    factory::ticket_type::TicketTypeFactory::new(db, guild.guild_id, "bug")
        .build()
        .await?;

    let (other, _) = factory::helpers::create_guild_with_ticket(db).await?;

    let deleted = GuildRepository::new(db)
        .delete(guild.guild_id as u64)
        .await?;

    assert!(deleted);
    assert!(entity::prelude::GuildConfig::find_by_id(guild.guild_id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Ticket::find().all(db).await?.len(), 1);
    assert!(entity::prelude::Member::find().all(db).await?.is_empty());
    assert!(entity::prelude::GuildRoleList::find().all(db).await?.is_empty());
    assert!(entity::prelude::TicketBot::find().all(db).await?.is_empty());
    assert!(entity::prelude::TicketType::find().all(db).await?.is_empty());
    assert!(entity::prelude::GuildConfig::find_by_id(other.guild_id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a guild that was never configured.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!GuildRepository::new(db).delete(123).await?);

    Ok(())
}
