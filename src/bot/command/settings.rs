//! `/settings`: administrator configuration of the guild.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed,
    Permissions, ResolvedOption,
};

use crate::{
    bot::{
        command::options::{self, sub, with_duration},
        embed,
    },
    error::{validation::ValidationError, AppError},
    model::{
        guild::{AutocloseKind, BlockKind, GuildFlag},
        role_list::RoleList,
        ticket_type::ToggleTicketTypeParam,
    },
    service::settings::SettingsService,
    util::interval,
};

pub fn register() -> CreateCommand {
    let role_list = |name: &str, description: &str| {
        sub(name, description).add_sub_option(
            CreateCommandOption::new(CommandOptionType::Role, "role", "Role to add or remove.")
                .required(true),
        )
    };
    let block_role = |name: &str, description: &str| {
        sub(name, description).add_sub_option(CreateCommandOption::new(
            CommandOptionType::Role,
            "role",
            "Role to apply. Omit to unset.",
        ))
    };
    let flag = |name: &str, description: &str| {
        CreateCommandOption::new(CommandOptionType::Boolean, name, description)
    };

    CreateCommand::new("settings")
        .description("Configure the bot for this server.")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .dm_permission(false)
        .add_option(
            sub("ticketbot", "Add or remove a bot whose channels are tickets.").add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The ticket bot.")
                    .required(true),
            ),
        )
        .add_option(role_list("staff", "Add or remove a staff role."))
        .add_option(role_list(
            "observers",
            "Add or remove a role added to every staff notes thread.",
        ))
        .add_option(role_list(
            "communitysupport",
            "Add or remove a community support role.",
        ))
        .add_option(role_list(
            "communityping",
            "Add or remove a role pinged when a ticket opens.",
        ))
        .add_option(
            sub("openmsg", "Set the message posted in new staff notes threads.").add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "message",
                    "Use $channel for the ticket channel.",
                )
                .max_length(200)
                .required(true),
            ),
        )
        .add_option(
            sub("staffteamname", "Set the name anonymous staff messages are sent as.")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::String, "name", "Team name.")
                        .max_length(40)
                        .required(true),
                ),
        )
        .add_option(with_duration(sub(
            "autoclose",
            "Close tickets nobody answers within this time. 0 disables.",
        )))
        .add_option(with_duration(sub(
            "anyautoclose",
            "Close tickets after this long without a message. 0 disables.",
        )))
        .add_option(with_duration(sub(
            "autowarn",
            "Warn in tickets after this long without a message. 0 disables.",
        )))
        .add_option(sub("msgdiscovery", "Toggle quoting of linked messages."))
        .add_option(sub(
            "stripbuttons",
            "Toggle removing buttons from ticket bot messages.",
        ))
        .add_option(block_role("supportblock", "Set the support block role."))
        .add_option(block_role("helpingblock", "Set the helping block role."))
        .add_option(
            sub("tickettype", "Add or remove a ticket type.")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "prefix",
                        "Channel name prefix of the ticket type.",
                    )
                    .max_length(20)
                    .required(true),
                )
                .add_sub_option(flag("communityping", "Ping community roles. Default true."))
                .add_sub_option(flag(
                    "communityaccess",
                    "Give community roles access. Default true.",
                ))
                .add_sub_option(flag("stripbuttons", "Strip buttons. Default true."))
                .add_sub_option(flag("ignore", "Skip these tickets entirely. Default false.")),
        )
}

pub async fn run(
    db: &DatabaseConnection,
    command: &CommandInteraction,
) -> Result<CreateEmbed, AppError> {
    let guild_id = command.guild_id.ok_or(ValidationError::GuildOnly)?.get();
    let options = command.data.options();
    let (name, args) = options::subcommand(&options)?;

    let service = SettingsService::new(db);

    match name {
        "ticketbot" => {
            let user = options::required_user(args, "user")?;
            let outcome = service.toggle_ticket_bot(guild_id, user.id.get()).await?;

            Ok(embed::toggled(
                "Ticket Bots",
                outcome,
                &format!("<@{}>", user.id),
            ))
        }
        "staff" => toggle_role(&service, guild_id, RoleList::Staff, args).await,
        "observers" => toggle_role(&service, guild_id, RoleList::Observers, args).await,
        "communitysupport" => toggle_role(&service, guild_id, RoleList::Community, args).await,
        "communityping" => toggle_role(&service, guild_id, RoleList::CommunityPing, args).await,
        "openmsg" => {
            let message = options::required_string(args, "message")?;
            let change = service.set_open_message(guild_id, message).await?;

            Ok(embed::changed(
                "Open Message",
                &change.previous,
                &change.current,
            ))
        }
        "staffteamname" => {
            let name = options::required_string(args, "name")?;
            let change = service.set_staff_team_name(guild_id, name).await?;

            Ok(embed::changed(
                "Staff Team Name",
                &change.previous,
                &change.current,
            ))
        }
        "autoclose" => set_autoclose(&service, guild_id, AutocloseKind::FirstResponse, args).await,
        "anyautoclose" => set_autoclose(&service, guild_id, AutocloseKind::AnyResponse, args).await,
        "autowarn" => set_autoclose(&service, guild_id, AutocloseKind::Warning, args).await,
        "msgdiscovery" => toggle_flag(&service, guild_id, GuildFlag::MsgDiscovery).await,
        "stripbuttons" => toggle_flag(&service, guild_id, GuildFlag::StripButtons).await,
        "supportblock" => set_block_role(&service, guild_id, BlockKind::Support, args).await,
        "helpingblock" => set_block_role(&service, guild_id, BlockKind::Helping, args).await,
        "tickettype" => {
            let param = ToggleTicketTypeParam {
                guild_id,
                prefix: options::required_string(args, "prefix")?.to_string(),
                community_ping: options::boolean(args, "communityping").unwrap_or(true),
                community_access: options::boolean(args, "communityaccess").unwrap_or(true),
                strip_buttons: options::boolean(args, "stripbuttons").unwrap_or(true),
                ignore: options::boolean(args, "ignore").unwrap_or(false),
            };
            let subject = format!("`{}`", param.prefix);
            let outcome = service.toggle_ticket_type(param).await?;

            Ok(embed::toggled("Ticket Types", outcome, &subject))
        }
        other => Err(ValidationError::UnknownSubcommand(other.to_string()).into()),
    }
}

async fn toggle_role(
    service: &SettingsService<'_>,
    guild_id: u64,
    list: RoleList,
    args: &[ResolvedOption<'_>],
) -> Result<CreateEmbed, AppError> {
    let role = options::required_role(args, "role")?;
    let outcome = service.toggle_role(guild_id, list, role).await?;

    Ok(embed::toggled(
        &format!("{} Roles", list.label()),
        outcome,
        &format!("<@&{}>", role.id),
    ))
}

async fn set_autoclose(
    service: &SettingsService<'_>,
    guild_id: u64,
    kind: AutocloseKind,
    args: &[ResolvedOption<'_>],
) -> Result<CreateEmbed, AppError> {
    let (days, hours, minutes) = options::duration(args);
    let change = service
        .set_autoclose(guild_id, kind, days, hours, minutes)
        .await?;

    Ok(embed::changed(
        kind.label(),
        &interval::format_minutes(change.previous),
        &interval::format_minutes(change.current),
    ))
}

async fn toggle_flag(
    service: &SettingsService<'_>,
    guild_id: u64,
    flag: GuildFlag,
) -> Result<CreateEmbed, AppError> {
    let enabled = service.toggle_flag(guild_id, flag).await?;
    let state = if enabled { "enabled" } else { "disabled" };

    Ok(embed::success(
        flag.label(),
        format!("{} is now {}.", flag.label(), state),
    ))
}

async fn set_block_role(
    service: &SettingsService<'_>,
    guild_id: u64,
    kind: BlockKind,
    args: &[ResolvedOption<'_>],
) -> Result<CreateEmbed, AppError> {
    let change = service
        .set_block_role(guild_id, kind, options::role(args, "role"))
        .await?;
    let mention = |role: Option<u64>| role.map_or("None".to_string(), |id| format!("<@&{}>", id));

    let mut title = kind.label().to_string();
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }

    Ok(embed::changed(
        &format!("{} Role", title),
        &mention(change.previous),
        &mention(change.current),
    ))
}
