use super::*;

/// Tests replacing the open message.
///
/// Verifies that the previous message is returned and the new one is stored.
///
/// Expected: Ok with the default message returned
#[tokio::test]
async fn returns_previous_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let previous = repo.set_open_message(1, "Notes for $channel").await?;

    assert_eq!(previous, "Staff notes for Ticket $channel.");
    assert_eq!(repo.get_or_create(1).await?.open_message, "Notes for $channel");

    Ok(())
}

/// Tests replacing the staff team name.
///
/// Expected: Ok with the new name stored
#[tokio::test]
async fn sets_staff_team_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let previous = repo.set_staff_team_name(1, "Helpers").await?;

    assert_eq!(previous, "Staff Team");
    assert_eq!(repo.get_or_create(1).await?.staff_team_name, "Helpers");

    Ok(())
}
