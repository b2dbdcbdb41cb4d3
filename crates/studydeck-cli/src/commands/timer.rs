use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use serde::Serialize;
use studydeck_core::{ClockSettings, Config, Database, Event, SessionClock, StudyStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use super::{open_store, CmdResult};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the session clock in the foreground.
    ///
    /// While running, type `p` to pause, `s` to start, `r` to reset and
    /// `q` to quit, each followed by Enter.
    Run {
        /// Work session length in minutes
        #[arg(long)]
        session: Option<String>,
        /// Short break length in minutes
        #[arg(long)]
        short: Option<String>,
        /// Long break length in minutes
        #[arg(long)]
        long: Option<String>,
        /// Stop after this many completed work sessions
        #[arg(long)]
        cycles: Option<u32>,
        /// Stop after each transition instead of continuing automatically
        #[arg(long)]
        no_auto: bool,
    },
    /// Print configured lengths and completed sessions as JSON
    Status,
}

#[derive(Serialize)]
struct TimerStatus {
    session_min: u64,
    short_break_min: u64,
    long_break_min: u64,
    auto_continue: bool,
    completed: u32,
}

/// Lengths given on the command line. Each one beats the config file.
#[derive(Debug, Clone, Default)]
struct LengthFlags {
    session: Option<String>,
    short: Option<String>,
    long: Option<String>,
}

pub fn run(action: TimerAction) -> CmdResult {
    let config = Config::load_or_default();
    let store = open_store()?;

    match action {
        TimerAction::Run {
            session,
            short,
            long,
            cycles,
            no_auto,
        } => {
            let flags = LengthFlags {
                session,
                short,
                long,
            };
            let clock = SessionClock::new(resolve_settings(&config, &flags))
                .with_auto_continue(config.timer.auto_continue && !no_auto);
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            rt.block_on(run_clock(store, clock, flags, cycles))?;
        }
        TimerAction::Status => {
            let settings = config.timer.clock_settings();
            let status = TimerStatus {
                session_min: settings.session_min(),
                short_break_min: settings.short_break_min(),
                long_break_min: settings.long_break_min(),
                auto_continue: config.timer.auto_continue,
                completed: store.state().pomodoro.completed,
            };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}

/// Flags win over the config file; each one is read leniently.
fn resolve_settings(config: &Config, flags: &LengthFlags) -> ClockSettings {
    let timer = &config.timer;
    let pick = |flag: &Option<String>, fallback: u32| {
        flag.clone().unwrap_or_else(|| fallback.to_string())
    };
    ClockSettings::from_raw(
        &pick(&flags.session, timer.session_minutes),
        &pick(&flags.short, timer.short_break_minutes),
        &pick(&flags.long, timer.long_break_minutes),
    )
}

/// Re-read the config so edits made while the clock runs take effect at the
/// next reset or completion.
fn refresh_settings(clock: &mut SessionClock, flags: &LengthFlags) {
    clock.set_settings(resolve_settings(&Config::load_or_default(), flags));
}

async fn run_clock(
    mut store: StudyStore<Database>,
    mut clock: SessionClock,
    flags: LengthFlags,
    cycles: Option<u32>,
) -> CmdResult {
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut finished = 0u32;

    if let Some(event) = clock.start() {
        store.announce(event);
    }
    draw(&clock);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if clock.is_running() && clock.remaining_secs() <= 1 {
                    refresh_settings(&mut clock, &flags);
                }
                if let Some(event) = clock.tick(&mut store)? {
                    eprintln!();
                    if matches!(event, Event::SessionCompleted { .. }) {
                        finished += 1;
                        if cycles.is_some_and(|limit| finished >= limit) {
                            break;
                        }
                    }
                }
                draw(&clock);
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    None => stdin_open = false,
                    Some(cmd) => {
                        let event = match cmd.trim() {
                            "s" | "start" => clock.start(),
                            "p" | "pause" => clock.pause(),
                            "r" | "reset" => {
                                refresh_settings(&mut clock, &flags);
                                Some(clock.reset())
                            }
                            "q" | "quit" => break,
                            _ => {
                                eprintln!("commands: s(tart) p(ause) r(eset) q(uit)");
                                None
                            }
                        };
                        if let Some(event) = event {
                            eprintln!();
                            store.announce(event);
                        }
                        draw(&clock);
                    }
                }
            }
        }

        if !stdin_open && !clock.is_running() {
            break;
        }
    }

    eprintln!();
    println!("Completed sessions: {}", store.state().pomodoro.completed);
    Ok(())
}

fn draw(clock: &SessionClock) {
    let state = if clock.is_running() { "Running..." } else { "Paused" };
    eprint!("\r{:<5} {} {state:<10}", clock.mode(), clock.remaining_display());
    let _ = std::io::stderr().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let config = Config::default();
        let flags = LengthFlags {
            session: Some("50".into()),
            short: None,
            long: Some("junk".into()),
        };
        let settings = resolve_settings(&config, &flags);
        assert_eq!(settings.session_min(), 50);
        assert_eq!(settings.short_break_min(), 5);
        assert_eq!(settings.long_break_min(), 15);
    }

    #[test]
    fn config_lengths_are_used_without_flags() {
        let mut config = Config::default();
        config.timer.session_minutes = 45;
        let settings = resolve_settings(&config, &LengthFlags::default());
        assert_eq!(settings.session_min(), 45);
    }

    #[test]
    fn changed_config_is_picked_up_on_next_resolve() {
        let flags = LengthFlags {
            session: Some("1".into()),
            ..LengthFlags::default()
        };
        let mut config = Config::default();
        let mut clock = SessionClock::new(resolve_settings(&config, &flags));
        clock.start();

        config.apply("timer.short_break_minutes", "10").unwrap();
        config.apply("timer.session_minutes", "40").unwrap();
        clock.set_settings(resolve_settings(&config, &flags));
        assert_eq!(clock.remaining_secs(), 60);

        let settings = clock.settings();
        assert_eq!(settings.short_break_min(), 10);
        assert_eq!(settings.session_min(), 1);

        clock.reset();
        assert_eq!(clock.remaining_secs(), 60);
    }
}
