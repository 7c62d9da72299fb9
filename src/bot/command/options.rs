//! Accessors for resolved slash-command options.

use serenity::all::{
    CommandOptionType, CreateCommandOption, ResolvedOption, ResolvedValue, Role, User,
};

use crate::{error::validation::ValidationError, util::interval};

/// Splits the invoked sub-command from its arguments.
pub fn subcommand<'a, 'b>(
    options: &'b [ResolvedOption<'a>],
) -> Result<(&'a str, &'b [ResolvedOption<'a>]), ValidationError> {
    match options.first() {
        Some(ResolvedOption {
            name,
            value: ResolvedValue::SubCommand(args),
            ..
        }) => Ok((*name, args.as_slice())),
        Some(option) => Err(ValidationError::UnknownSubcommand(option.name.to_string())),
        None => Err(ValidationError::UnknownSubcommand(String::new())),
    }
}

pub fn role<'a>(args: &[ResolvedOption<'a>], name: &str) -> Option<&'a Role> {
    args.iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::Role(role) => Some(role),
            _ => None,
        })
}

pub fn user<'a>(args: &[ResolvedOption<'a>], name: &str) -> Option<&'a User> {
    args.iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::User(user, _) => Some(user),
            _ => None,
        })
}

pub fn string<'a>(args: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    args.iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::String(value) => Some(value),
            _ => None,
        })
}

pub fn integer(args: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    args.iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::Integer(value) => Some(value),
            _ => None,
        })
}

pub fn boolean(args: &[ResolvedOption<'_>], name: &str) -> Option<bool> {
    args.iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::Boolean(value) => Some(value),
            _ => None,
        })
}

/// Optional `days`, `hours` and `minutes` arguments, each defaulting to zero.
pub fn duration(args: &[ResolvedOption<'_>]) -> (i64, i64, i64) {
    (
        integer(args, "days").unwrap_or(0),
        integer(args, "hours").unwrap_or(0),
        integer(args, "minutes").unwrap_or(0),
    )
}

pub fn required_role<'a>(
    args: &[ResolvedOption<'a>],
    name: &'static str,
) -> Result<&'a Role, ValidationError> {
    role(args, name).ok_or(ValidationError::MissingOption(name))
}

pub fn required_user<'a>(
    args: &[ResolvedOption<'a>],
    name: &'static str,
) -> Result<&'a User, ValidationError> {
    user(args, name).ok_or(ValidationError::MissingOption(name))
}

pub fn required_string<'a>(
    args: &[ResolvedOption<'a>],
    name: &'static str,
) -> Result<&'a str, ValidationError> {
    string(args, name).ok_or(ValidationError::MissingOption(name))
}

/// Definition of a sub-command with no arguments.
pub fn sub(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

/// The `days`/`hours`/`minutes` arguments shared by duration sub-commands.
pub fn with_duration(option: CreateCommandOption) -> CreateCommandOption {
    [
        ("days", interval::MAX_DAYS),
        ("hours", interval::MAX_HOURS),
        ("minutes", interval::MAX_MINUTES_OPTION),
    ]
    .into_iter()
    .fold(option, |option, (unit, max)| {
        option.add_sub_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                unit,
                format!("Number of {}.", unit),
            )
            .min_int_value(0)
            .max_int_value(max)
            .required(false),
        )
    })
}
