use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::{all::ChannelId, http::Http};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, model::ticket::Ticket, service::autoclose::AutocloseService};

/// Starts the autoclose warning scheduler.
///
/// Runs every minute and posts a warning into each ticket that has been quiet for
/// longer than its guild's warning interval. A ticket is warned once until
/// somebody responds again.
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let http = discord_http.clone();

        Box::pin(async move {
            if let Err(e) = process_warnings(&db, &http, Utc::now()).await {
                tracing::error!("Error processing autoclose warnings: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Autoclose warning scheduler started");

    Ok(())
}

async fn process_warnings(
    db: &DatabaseConnection,
    http: &Http,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let service = AutocloseService::new(db);

    for ticket in service.due_warnings(now).await? {
        if let Err(e) = warn_ticket(&service, http, &ticket).await {
            tracing::warn!(
                "Failed to post inactivity warning in ticket {}: {}",
                ticket.channel_id,
                e
            );
        }
    }

    Ok(())
}

async fn warn_ticket(
    service: &AutocloseService<'_>,
    http: &Http,
    ticket: &Ticket,
) -> Result<(), AppError> {
    ChannelId::new(ticket.channel_id)
        .say(http, warning_message(ticket.last_response))
        .await?;
    service.mark_warned(ticket.channel_id).await?;

    tracing::debug!("Warned inactive ticket {}", ticket.channel_id);

    Ok(())
}

fn warning_message(last_response: DateTime<Utc>) -> String {
    format!(
        "This ticket has been inactive since <t:{}:R>. \
         If nobody responds, it may be closed soon.",
        last_response.timestamp()
    )
}
