//! EduVerify command line — entry point for the discovery and
//! verification flows.
//!
//! All registry state is volatile: every invocation starts from the
//! seeded institute list, mirroring the application's reset-on-reload
//! behavior.

mod config;

use clap::Parser;
use config::AppConfig;
use eduverify_counselor::{build_context, CounselorClient};
use eduverify_directory::NtaDirectory;
use eduverify_ranking::rank;
use eduverify_registry::{NewInstitute, Registry};
use eduverify_types::{Fee, InstituteId};
use eduverify_verification::{promote, verify_batch};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eduverify", about = "Coaching-institute discovery and result verification")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "EDUVERIFY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Counselor API key.
    #[arg(long, env = "EDUVERIFY_API_KEY")]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Search institutes by city, ranked by verified results.
    Search {
        /// Location query (case-insensitive substring; empty matches all).
        #[arg(default_value = "")]
        query: String,
    },
    /// Run batch verification for a list of roll numbers.
    Verify {
        /// Institute claiming the results (exempt from the conflict scan).
        #[arg(long)]
        institute: Option<String>,
        /// Candidate roll numbers.
        rolls: Vec<String>,
    },
    /// Register a new institute.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        /// Annual fee, display-formatted or plain ("₹1,50,000" or "150000").
        #[arg(long)]
        fee: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        hostel: bool,
    },
    /// Verify roll numbers and enroll every success onto a roster.
    Enroll {
        #[arg(long)]
        institute: String,
        rolls: Vec<String>,
    },
    /// Ask the AI counselor a question about the current institutes.
    Counsel {
        prompt: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match cli.config {
        Some(ref path) => AppConfig::from_toml_file(path)?,
        None => AppConfig::default(),
    };
    let mut config = file_config;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(key) = cli.api_key {
        config.counselor.api_key = key;
    }

    eduverify_utils::init_tracing(&config.log_level);

    let mut registry = eduverify_registry::seeded();
    let directory = NtaDirectory::mock();

    match cli.command {
        Command::Search { query } => {
            let ranked = rank(registry.institutes(), &query);
            if ranked.is_empty() {
                println!("No institutes match \"{query}\".");
                return Ok(());
            }
            for (n, institute) in ranked.iter().enumerate() {
                println!(
                    "{}. {} ({}) — {} verified students, fee {}, rating {}{}",
                    n + 1,
                    institute.name,
                    institute.location,
                    institute.students.len(),
                    institute.fee,
                    institute.rating,
                    if institute.hostel { ", hostel" } else { "" },
                );
            }
        }
        Command::Verify { institute, rolls } => {
            let claiming = institute.map(InstituteId::new);
            let outcomes = verify_batch(&registry, &directory, &rolls, claiming.as_ref());
            for outcome in &outcomes {
                println!("{outcome}");
            }
        }
        Command::Register {
            name,
            location,
            fee,
            phone,
            hostel,
        } => {
            let institute = registry.register(NewInstitute {
                name,
                location,
                fee: Fee::parse_display(&fee),
                phone,
                hostel,
            })?;
            println!(
                "Registered \"{}\" in {} with id {} (fee {}).",
                institute.name, institute.location, institute.id, institute.fee
            );
        }
        Command::Enroll { institute, rolls } => {
            let id = InstituteId::new(institute);
            let outcomes = verify_batch(&registry, &directory, &rolls, Some(&id));
            for outcome in &outcomes {
                if outcome.is_success() {
                    match promote(&mut registry, outcome, &id) {
                        Ok(updated) => println!(
                            "{}: enrolled at \"{}\" ({} on roster)",
                            outcome.roll(),
                            updated.name,
                            updated.students.len(),
                        ),
                        Err(e) => println!("{}: {e}", outcome.roll()),
                    }
                } else {
                    println!("{outcome}");
                }
            }
        }
        Command::Counsel { prompt } => {
            let prompt = prompt.join(" ");
            let context = build_context(&registry);
            tracing::debug!(%context, "forwarding prompt to counselor");
            let client = CounselorClient::new(config.counselor.clone());
            let reply = client.ask(&prompt, &context).await;
            println!("{reply}");
        }
    }

    Ok(())
}
