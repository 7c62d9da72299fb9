use sea_orm::DatabaseConnection;
use serenity::all::{Context, Interaction};

use crate::bot::command;

/// Routes slash-command interactions to their command; other interaction kinds
/// are not used.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    ctx: Context,
    interaction: Interaction,
) {
    if let Interaction::Command(command) = interaction {
        command::dispatch(db, &ctx, &command).await;
    }
}
