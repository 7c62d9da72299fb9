//! Member join handler.
//!
//! Penalties are stored per member, so leaving and rejoining does not shed a
//! support or helping block.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Member, RoleId};

use crate::{model::member::JoinPenalty, service::penalty::PenaltyService};

/// Handles a member joining a guild by re-applying an active penalty role.
///
/// # Arguments
/// - `db` - Database connection
/// - `ctx` - Discord context for the HTTP client
/// - `new_member` - The member who joined
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    ctx: Context,
    new_member: Member,
) {
    let guild_id = new_member.guild_id;
    let user_id = new_member.user.id;

    let resolution = match PenaltyService::new(db)
        .resolve_on_join(guild_id.get(), user_id.get(), Utc::now())
        .await
    {
        Ok(resolution) => resolution,
        Err(e) => {
            tracing::error!(
                "Failed to resolve penalty for {} in guild {}: {:?}",
                user_id,
                guild_id,
                e
            );
            return;
        }
    };

    match resolution {
        JoinPenalty::None => {}
        JoinPenalty::Expired => {
            tracing::info!("Penalty for {} in guild {} has expired", user_id, guild_id)
        }
        JoinPenalty::Pardoned => tracing::info!(
            "Penalty for {} in guild {} cleared, penalty role no longer configured",
            user_id,
            guild_id
        ),
        JoinPenalty::ApplyRole(role_id) => {
            if let Err(e) = ctx
                .http
                .add_member_role(
                    guild_id,
                    user_id,
                    RoleId::new(role_id),
                    Some("Re-applying penalty after rejoin"),
                )
                .await
            {
                tracing::warn!(
                    "Failed to re-apply penalty role {} to {} in guild {}: {:?}",
                    role_id,
                    user_id,
                    guild_id,
                    e
                );
            } else {
                tracing::info!(
                    "Re-applied penalty role {} to {} in guild {}",
                    role_id,
                    user_id,
                    guild_id
                );
            }
        }
    }
}
