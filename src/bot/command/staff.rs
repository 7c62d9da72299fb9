//! `/staff`: ticket moderation for members holding a staff role.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, GuildId, ResolvedOption, RoleId, UserId,
};

use crate::{
    bot::{
        command::options::{self, sub, with_duration},
        embed,
    },
    error::{validation::ValidationError, AppError},
    model::guild::BlockKind,
    service::{penalty::PenaltyService, ticket::TicketService},
};

pub fn register() -> CreateCommand {
    let target = |name: &str, description: &str| {
        sub(name, description).add_sub_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The member.")
                .required(true),
        )
    };

    CreateCommand::new("staff")
        .description("Ticket moderation commands.")
        .dm_permission(false)
        .add_option(sub("anonymous", "Toggle anonymous staff replies in this ticket."))
        .add_option(with_duration(target(
            "supportblock",
            "Stop a member from opening tickets. No duration is permanent.",
        )))
        .add_option(with_duration(target(
            "helpingblock",
            "Stop a member from seeing tickets. No duration is permanent.",
        )))
        .add_option(target("pardon", "Lift a member's penalty."))
}

pub async fn run(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<CreateEmbed, AppError> {
    let guild_id = command.guild_id.ok_or(ValidationError::GuildOnly)?;
    let role_ids: Vec<u64> = command
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    if !TicketService::new(db)
        .is_staff(guild_id.get(), &role_ids)
        .await?
    {
        return Err(AppError::Forbidden(
            "You must hold a staff role to use this command.".to_string(),
        ));
    }

    let options = command.data.options();
    let (name, args) = options::subcommand(&options)?;

    match name {
        "anonymous" => {
            let anonymous = TicketService::new(db)
                .toggle_anonymous(command.channel_id.get())
                .await?;
            let state = if anonymous { "enabled" } else { "disabled" };

            Ok(embed::success(
                "Anonymous",
                format!("Anonymous staff replies are now {} in this ticket.", state),
            ))
        }
        "supportblock" => penalize(db, ctx, guild_id, BlockKind::Support, args).await,
        "helpingblock" => penalize(db, ctx, guild_id, BlockKind::Helping, args).await,
        "pardon" => {
            let user = options::required_user(args, "user")?;
            let roles = PenaltyService::new(db)
                .pardon(guild_id.get(), user.id.get())
                .await?;

            for role_id in roles {
                remove_role(ctx, guild_id, user.id, RoleId::new(role_id)).await;
            }

            Ok(embed::success(
                "Pardoned",
                format!("Lifted all penalties from <@{}>.", user.id),
            ))
        }
        other => Err(ValidationError::UnknownSubcommand(other.to_string()).into()),
    }
}

async fn penalize(
    db: &DatabaseConnection,
    ctx: &Context,
    guild_id: GuildId,
    kind: BlockKind,
    args: &[ResolvedOption<'_>],
) -> Result<CreateEmbed, AppError> {
    let user = options::required_user(args, "user")?;
    let penalty = PenaltyService::new(db)
        .penalize(
            guild_id.get(),
            user.id.get(),
            kind,
            options::duration(args),
            Utc::now(),
        )
        .await?;

    if let Err(e) = ctx
        .http
        .add_member_role(
            guild_id,
            user.id,
            RoleId::new(penalty.role_id),
            Some("Penalty applied by staff"),
        )
        .await
    {
        tracing::warn!(
            "Failed to apply {} role to {} in guild {}: {:?}",
            kind.label(),
            user.id,
            guild_id,
            e
        );
    }

    let until = match penalty.till {
        Some(till) => format!("until <t:{}:f>", till.timestamp()),
        None => "permanently".to_string(),
    };

    Ok(embed::success(
        "Penalty Applied",
        format!("Applied a {} to <@{}> {}.", kind.label(), user.id, until),
    ))
}

async fn remove_role(ctx: &Context, guild_id: GuildId, user_id: UserId, role_id: RoleId) {
    if let Err(e) = ctx
        .http
        .remove_member_role(guild_id, user_id, role_id, Some("Penalty lifted by staff"))
        .await
    {
        tracing::warn!(
            "Failed to remove role {} from {} in guild {}: {:?}",
            role_id,
            user_id,
            guild_id,
            e
        );
    }
}
