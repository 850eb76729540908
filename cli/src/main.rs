//! CLI entrypoint for plenum
//!
//! This is the main binary that wires together all layers using
//! dependency injection and drives one assembly vote end to end.

use anyhow::{Result, bail};
use clap::Parser;
use plenum_application::{
    CastVoteUseCase, EligibilityGatekeeper, ManageAgendaUseCase, SessionWindowTracker,
    TallyVotesUseCase,
};
use plenum_domain::{NewAgendaItem, VoteValue, VoterId};
use plenum_infrastructure::{
    ConfigLoader, MemoryAgendaItemRepository, MemoryEligibilityRecordRepository,
    MemorySessionRepository, MemoryVoteRepository, build_verifier,
};
use plenum_presentation::{CastAttempt, Cli, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    config.validate()?;

    let title = match cli.title {
        Some(title) => title,
        None => bail!("Agenda item title is required."),
    };

    info!("Starting plenum");

    // === Dependency Injection ===
    // Infrastructure adapters: in-memory store + configured verifier
    let agenda_items = Arc::new(MemoryAgendaItemRepository::new());
    let sessions = Arc::new(MemorySessionRepository::new());
    let votes = Arc::new(MemoryVoteRepository::new());
    let eligibility = Arc::new(MemoryEligibilityRecordRepository::new());
    let verifier = build_verifier(&config.verifier)?;

    // Use cases
    let tracker = Arc::new(SessionWindowTracker::new(
        agenda_items.clone(),
        sessions.clone(),
    ));
    let gatekeeper = Arc::new(EligibilityGatekeeper::new(eligibility.clone(), verifier));
    let agenda = ManageAgendaUseCase::new(
        agenda_items.clone(),
        sessions.clone(),
        votes.clone(),
        eligibility.clone(),
    );
    let cast_vote = Arc::new(CastVoteUseCase::new(
        agenda_items.clone(),
        votes.clone(),
        tracker.clone(),
        gatekeeper,
    ));
    let tally = TallyVotesUseCase::new(tracker.clone(), votes.clone());

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                 plenum - Assembly Voting                   |");
        println!("+============================================================+");
        println!();
    }

    // Register the agenda item and open its session
    let item = agenda
        .create(NewAgendaItem::new(title, cli.description.clone())?)
        .await?;
    let minutes = cli
        .duration
        .unwrap_or(config.session.default_duration_minutes);
    let session = tracker.open(item.id(), Some(minutes)).await?;

    // Simulated voters cast concurrently; rejections are outcomes, not failures
    let mut join_set = JoinSet::new();
    for i in 1..=cli.voters {
        let voter = VoterId::new(format!("{i:03}"))?;
        let value = if i % 2 == 0 {
            VoteValue::No
        } else {
            VoteValue::Yes
        };
        let cast_vote = Arc::clone(&cast_vote);
        let agenda_item_id = item.id();
        join_set.spawn(async move {
            let outcome = cast_vote.execute(agenda_item_id, voter.clone(), value).await;
            CastAttempt {
                voter,
                value,
                outcome,
            }
        });
    }

    let mut attempts = Vec::new();
    while let Some(result) = join_set.join_next().await {
        attempts.push(result?);
    }
    attempts.sort_by(|a, b| a.voter.as_str().cmp(b.voter.as_str()));

    // One duplicate attempt to demonstrate the conflict outcome
    if cli.voters > 0 {
        let voter = VoterId::new("001")?;
        let outcome = cast_vote
            .execute(item.id(), voter.clone(), VoteValue::Yes)
            .await;
        attempts.push(CastAttempt {
            voter,
            value: VoteValue::Yes,
            outcome,
        });
    }

    let result = tally.execute(item.id()).await?;

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&item, &session, &attempts, &result),
        OutputFormat::Tally => ConsoleFormatter::format_tally_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}
