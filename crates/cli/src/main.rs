use std::error::Error;

use clap::{Args, Parser, Subcommand};

use api_types::{SplitMode, SplitType, settle::SettleUp};
use client::Client;
use ledger::{ExpenseForm, Participant, ParticipantId};

mod config;

#[derive(Parser, Debug)]
#[command(name = "splitledger")]
#[command(about = "Track and split shared expenses from the terminal")]
struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override backend base URL (e.g. http://127.0.0.1:8000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override the session user's backend id.
    #[arg(long)]
    user_id: Option<i64>,
    /// Override the session user's display name.
    #[arg(long)]
    user_name: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show per-friend balances and the overall headline.
    Friends,
    /// Create a shared expense.
    Expense(ExpenseArgs),
    /// Record a settlement payment between two users.
    SettleUp(SettleUpArgs),
    /// Show the activity feed.
    Activity,
}

#[derive(Args, Debug)]
struct ExpenseArgs {
    #[arg(long)]
    description: String,
    /// Total amount, as typed (coerced when the payload is built).
    #[arg(long)]
    amount: String,
    #[arg(long, default_value = "INR")]
    currency: String,
    #[arg(long)]
    group_id: Option<i64>,
    /// Participant: `me`, an id, or `id:name`. Repeatable.
    #[arg(long = "participant", required = true)]
    participants: Vec<String>,
    /// Who paid: `me`, an id, or `id:name`.
    #[arg(long)]
    payer: String,
    #[arg(long, value_enum, default_value = "equal")]
    split_type: SplitTypeArg,
    /// Custom split entry: `me=60` or `3=40.5`. Repeatable.
    #[arg(long = "split")]
    splits: Vec<String>,
    #[arg(long, value_enum, default_value = "amount")]
    split_mode: SplitModeArg,
}

#[derive(Args, Debug)]
struct SettleUpArgs {
    #[arg(long)]
    creditor_id: i64,
    #[arg(long)]
    debtor_id: i64,
    #[arg(long)]
    amount: f64,
    #[arg(long)]
    group_id: Option<i64>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SplitTypeArg {
    Equal,
    Unequal,
    Percentage,
    Custom,
}

impl From<SplitTypeArg> for SplitType {
    fn from(value: SplitTypeArg) -> Self {
        match value {
            SplitTypeArg::Equal => SplitType::Equal,
            SplitTypeArg::Unequal => SplitType::Unequal,
            SplitTypeArg::Percentage => SplitType::Percentage,
            SplitTypeArg::Custom => SplitType::Custom,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SplitModeArg {
    Amount,
    Share,
}

impl From<SplitModeArg> for SplitMode {
    fn from(value: SplitModeArg) -> Self {
        match value {
            SplitModeArg::Amount => SplitMode::Amount,
            SplitModeArg::Share => SplitMode::Share,
        }
    }
}

/// Parses `me`, `3` or `3:Ana` into a participant.
fn parse_participant(raw: &str, me_name: &str) -> Result<Participant, String> {
    if raw == "me" {
        return Ok(Participant::me(me_name));
    }
    let (id_part, name) = match raw.split_once(':') {
        Some((id, name)) => (id, name.to_string()),
        None => (raw, format!("#{raw}")),
    };
    let id: i64 = id_part
        .parse()
        .map_err(|_| format!("invalid participant: {raw}"))?;
    Ok(Participant::other(id, name))
}

/// Parses `me=60` or `3=40.5` into a split entry. The value stays a raw
/// string on purpose.
fn parse_split_entry(raw: &str) -> Result<(ParticipantId, String), String> {
    let (who, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid split entry (expected who=value): {raw}"))?;
    let id = if who == "me" {
        ParticipantId::Me
    } else {
        ParticipantId::Other(
            who.parse()
                .map_err(|_| format!("invalid split entry: {raw}"))?,
        )
    };
    Ok((id, value.to_string()))
}

async fn print_friends(client: &Client, user_id: i64) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut summary = client.expense_summary(user_id).await?;
    ledger::order(&mut summary);

    for entry in &summary {
        let status = if entry.amount_owed == 0.0 {
            "Settled Up".to_string()
        } else if entry.is_debtor {
            format!("You owe {:.2}", entry.amount_owed)
        } else {
            format!("You are owed {:.2}", entry.amount_owed)
        };
        println!("{:<24} {status}", entry.friend_name);
    }

    let total = ledger::total_balance(&summary);
    println!("{}", ledger::overall_message(total));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = config::load(config::Overrides {
        config: cli.config,
        base_url: cli.base_url,
        user_id: cli.user_id,
        user_name: cli.user_name,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "splitledger={level},client={level},ledger={level}",
            level = settings.level
        ))
        .init();

    if settings.user_id <= 0 {
        eprintln!("no user configured: set user_id in the config file or pass --user-id");
        std::process::exit(2);
    }

    let client = Client::new(&settings.base_url)?;
    tracing::debug!(base_url = %settings.base_url, user_id = settings.user_id, "backend configured");

    match cli.command {
        Command::Friends => print_friends(&client, settings.user_id).await?,
        Command::Expense(args) => {
            let mut form = ExpenseForm::new();
            form.description = args.description;
            form.amount = args.amount;
            form.currency = args.currency;
            form.set_split_type(args.split_type.into());
            if let Some(group_id) = args.group_id {
                let groups = client.groups(settings.user_id).await?;
                let group = groups.into_iter().find(|g| g.group_id == group_id);
                match group {
                    Some(group) => form.group = Some(group),
                    None => {
                        eprintln!("group not found: {group_id}");
                        std::process::exit(1);
                    }
                }
            }
            for raw in &args.participants {
                match parse_participant(raw, &settings.user_name) {
                    Ok(participant) => form.participants.push(participant),
                    Err(err) => {
                        eprintln!("{err}");
                        std::process::exit(2);
                    }
                }
            }
            match parse_participant(&args.payer, &settings.user_name) {
                Ok(payer) => form.payer = Some(payer),
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(2);
                }
            }

            if !args.splits.is_empty() {
                let mut draft = match form.begin_custom_split() {
                    Ok(draft) => draft,
                    Err(err) => {
                        eprintln!("{err}");
                        std::process::exit(1);
                    }
                };
                draft.set_mode(args.split_mode.into());
                for raw in &args.splits {
                    match parse_split_entry(raw) {
                        Ok((id, value)) => draft.set(id, value),
                        Err(err) => {
                            eprintln!("{err}");
                            std::process::exit(2);
                        }
                    }
                }
                match draft.finish(form.expected_total()) {
                    Ok(split) => form.attach_custom_split(split),
                    Err(err) => {
                        eprintln!("{err}");
                        std::process::exit(1);
                    }
                }
            }

            let payload = match form.assemble(settings.user_id) {
                Ok(payload) => payload,
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            };

            let record = client.expense_create(&payload).await?;
            println!("created expense {}: {}", record.id, record.description);

            // Balances are server-side; refetch instead of patching locally.
            print_friends(&client, settings.user_id).await?;
        }
        Command::SettleUp(args) => {
            let payload = SettleUp {
                user_id: settings.user_id,
                creditor_id: args.creditor_id,
                debtor_id: args.debtor_id,
                settle_up_amount: args.amount,
                group_id: args.group_id,
            };
            client.settle_up(&payload).await?;
            println!("settled {:.2}", args.amount);
            print_friends(&client, settings.user_id).await?;
        }
        Command::Activity => {
            let activities = client.activities(settings.user_id).await?;
            if activities.is_empty() {
                println!("No activities found");
            }
            for activity in activities {
                println!("{}  {}", activity.created_at, activity.description);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_spellings() {
        assert_eq!(
            parse_participant("me", "You").unwrap(),
            Participant::me("You")
        );
        assert_eq!(
            parse_participant("3:Ana", "You").unwrap(),
            Participant::other(3, "Ana")
        );
        assert_eq!(
            parse_participant("9", "You").unwrap(),
            Participant::other(9, "#9")
        );
        assert!(parse_participant("nope", "You").is_err());
    }

    #[test]
    fn split_entry_spellings() {
        assert_eq!(
            parse_split_entry("me=60").unwrap(),
            (ParticipantId::Me, "60".to_string())
        );
        assert_eq!(
            parse_split_entry("3=40.005").unwrap(),
            (ParticipantId::Other(3), "40.005".to_string())
        );
        assert!(parse_split_entry("me").is_err());
        assert!(parse_split_entry("x=1").is_err());
    }
}
