//! Console output formatter for voting reports

use colored::Colorize;
use plenum_domain::{AgendaItem, SessionStatus, Vote, VoteTally, VoteValue, VoterId, VotingError, VotingSession};

/// One cast attempt of the demonstration run and its outcome
pub struct CastAttempt {
    pub voter: VoterId,
    pub value: VoteValue,
    pub outcome: Result<Vote, VotingError>,
}

/// Formats voting results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete voting report
    pub fn format(
        item: &AgendaItem,
        session: &VotingSession,
        attempts: &[CastAttempt],
        tally: &VoteTally,
    ) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Assembly Voting Report"));
        output.push('\n');

        // Agenda item
        output.push_str(&format!(
            "{} {} (#{})\n",
            "Agenda item:".cyan().bold(),
            item.title(),
            item.id()
        ));
        if let Some(description) = item.description() {
            output.push_str(&format!("{} {}\n", "Description:".cyan().bold(), description));
        }
        output.push('\n');

        // Session window
        output.push_str(&format!(
            "{} {} -> {}\n\n",
            "Session:".cyan().bold(),
            session.opens_at().format("%H:%M:%S%.3f"),
            session.closes_at().format("%H:%M:%S%.3f"),
        ));

        // Cast outcomes
        output.push_str(&Self::section_header("Cast Outcomes"));
        for attempt in attempts {
            output.push_str(&Self::format_attempt(attempt));
        }
        output.push('\n');

        // Tally
        output.push_str(&Self::section_header("Tally"));
        output.push_str(&Self::format_counts(tally));

        output
    }

    /// Format only the tally section
    pub fn format_tally_only(tally: &VoteTally) -> String {
        Self::format_counts(tally)
    }

    /// Format the tally as JSON
    pub fn format_json(tally: &VoteTally) -> String {
        serde_json::to_string_pretty(tally)
            .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }

    fn format_attempt(attempt: &CastAttempt) -> String {
        match &attempt.outcome {
            Ok(_) => format!(
                "  {} voter {:<20} {}\n",
                "+".green().bold(),
                attempt.voter.as_str(),
                attempt.value.to_string().yellow()
            ),
            Err(e) => format!(
                "  {} voter {:<20} {}\n",
                "-".red().bold(),
                attempt.voter.as_str(),
                e.to_string().red()
            ),
        }
    }

    fn format_counts(tally: &VoteTally) -> String {
        let mut output = String::new();
        let status = match tally.status {
            SessionStatus::Open => "OPEN".green().bold(),
            SessionStatus::Closed => "CLOSED".red().bold(),
        };
        output.push_str(&format!("  {} {}\n", "Status:".cyan().bold(), status));
        output.push_str(&format!(
            "  {} {}\n",
            "YES:   ".cyan().bold(),
            tally.yes.to_string().yellow()
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "NO:    ".cyan().bold(),
            tally.no.to_string().yellow()
        ));
        output.push_str(&format!("  {} {}\n", "Total: ".cyan().bold(), tally.total));
        if tally.total > 0 && tally.total <= 60 {
            output.push_str(&format!("  {}\n", Self::tally_bar(tally)));
        }
        output
    }

    /// Visual tally summary (e.g. "[●●●○○]")
    fn tally_bar(tally: &VoteTally) -> String {
        let mut bar = String::from("[");
        for _ in 0..tally.yes {
            bar.push('●');
        }
        for _ in 0..tally.no {
            bar.push('○');
        }
        bar.push(']');
        bar
    }

    fn header(title: &str) -> String {
        format!(
            "{}\n{}\n{}\n",
            "=".repeat(60),
            format!("  {}", title).bold(),
            "=".repeat(60)
        )
    }

    fn section_header(title: &str) -> String {
        format!("{}\n", format!("--- {} ---", title).bold())
    }
}
