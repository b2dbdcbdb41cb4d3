use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studydeck", version, about = "StudyDeck CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Notes and local note tools
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Flashcard deck
    Flash {
        #[command(subcommand)]
        action: commands::flash::FlashAction,
    },
    /// Chapter progress and daily streak
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Pomodoro session clock
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Topic mastery log
    Mastery {
        #[command(subcommand)]
        action: commands::mastery::MasteryAction,
    },
    /// Exam reminders
    Reminder {
        #[command(subcommand)]
        action: commands::reminder::ReminderAction,
    },
    /// Mock multiple-choice tests
    Quiz {
        #[command(subcommand)]
        action: commands::quiz::QuizAction,
    },
    /// Export and import the study document
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print the whole dashboard
    Dashboard {
        /// Print the raw document as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a motivational quote
    Motivate,
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STUDYDECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Note { action } => commands::note::run(action),
        Commands::Flash { action } => commands::flash::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Mastery { action } => commands::mastery::run(action),
        Commands::Reminder { action } => commands::reminder::run(action),
        Commands::Quiz { action } => commands::quiz::run(action),
        Commands::Data { action } => commands::data::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Dashboard { json } => commands::dashboard::run(json),
        Commands::Motivate => commands::dashboard::motivate(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "studydeck", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
