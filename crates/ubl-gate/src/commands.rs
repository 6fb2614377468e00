//! Subcommand handlers
//!
//! Results go to stdout; logs go to stderr.

use serde::Serialize;
use tracing::warn;
use ubl_common::{AppError, AppResult};
use ubl_core::BanRecord;
use ubl_service::{BanListService, LoginDecision, LoginGate, PluginInfo, ServiceContext};
use uuid::Uuid;

/// Result of one login check
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub identity: Uuid,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Report total and active bans
pub async fn stats(ctx: &ServiceContext, json: bool) -> AppResult<()> {
    let summary = BanListService::new(ctx).summary().await?;

    if summary.dropped_rows > 0 {
        warn!(dropped_rows = summary.dropped_rows, "Some feed rows could not be read");
    }

    if json {
        return print_json(&summary);
    }

    println!(
        "There are {} total bans on the Universal Ban List.",
        summary.total
    );
    println!("{} of those bans are active.", summary.active);
    Ok(())
}

/// Run the login gate for each identity
pub async fn check(ctx: &ServiceContext, identities: &[String], json: bool) -> AppResult<()> {
    let identities = parse_identities(identities)?;
    let gate = LoginGate::new(ctx);

    let mut outcomes = Vec::with_capacity(identities.len());
    for identity in identities {
        let decision = gate.check(identity).await;
        outcomes.push(CheckOutcome {
            identity,
            allowed: decision.is_allowed(),
            message: match decision {
                LoginDecision::Allow => None,
                LoginDecision::Deny { message, .. } => Some(message),
            },
        });
    }

    if json {
        return print_json(&outcomes);
    }

    for outcome in &outcomes {
        match &outcome.message {
            None => println!("{}: allowed", outcome.identity),
            Some(message) => {
                println!("{}: denied", outcome.identity);
                for line in message.lines() {
                    println!("    {line}");
                }
            }
        }
    }
    Ok(())
}

/// Print ban records, optionally for one identity or only active ones
pub async fn list(
    ctx: &ServiceContext,
    identity: Option<&str>,
    active: bool,
    json: bool,
) -> AppResult<()> {
    let service = BanListService::new(ctx);
    let mut records = match identity {
        Some(raw) => service.try_retrieve_for(parse_identity(raw)?).await?,
        None => service.try_retrieve_all().await?,
    };

    if active {
        records.retain(BanRecord::is_active);
    }

    if json {
        return print_json(&records);
    }

    for record in &records {
        println!("{}", format_record(record));
    }
    Ok(())
}

/// Print plugin metadata
pub fn version(info: &PluginInfo, json: bool) -> AppResult<()> {
    if json {
        return print_json(info);
    }

    for line in info.lines() {
        println!("{line}");
    }
    Ok(())
}

pub fn parse_identity(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::invalid_input(format!("not a UUID: {raw}")))
}

pub fn parse_identities(raw: &[String]) -> AppResult<Vec<Uuid>> {
    raw.iter().map(|id| parse_identity(id)).collect()
}

/// One tab separated line per record
pub fn format_record(record: &BanRecord) -> String {
    let length = record
        .duration()
        .map_or_else(|| ubl_core::PERMANENT_LENGTH.to_string(), |d| d.to_string());
    let expiry = record
        .expiry_date()
        .map_or_else(|| ubl_core::NEVER_EXPIRES.to_string(), |d| d.to_string());

    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        record.identity_id(),
        record.username(),
        record.ban_date(),
        length,
        expiry,
        record.reason(),
        record.case_reference()
    )
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let out = serde_json::to_string_pretty(value).map_err(AppError::internal)?;
    println!("{out}");
    Ok(())
}
