use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use promptdeck::config::{Config, Provider};
use promptdeck::generation;
use promptdeck::logging::init_tracing;
use promptdeck::render::render_state;
use promptdeck::{RequestController, RequestState, RequestStatus, SubmitOutcome};

/// Send prompts to a text generation API.
#[derive(Debug, Parser)]
#[command(name = "promptdeck", version, about)]
struct Cli {
    /// Path to the config file (default: <config dir>/promptdeck/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use the simulated generator instead of the remote API.
    #[arg(long)]
    simulate: bool,

    /// Override the configured model.
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Prompt to send. Starts an interactive session when omitted.
    #[arg(trailing_var_arg = true)]
    prompt: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if cli.simulate {
        config.generation.provider = Provider::Simulated;
    }
    if let Some(model) = cli.model {
        config.generation.model = model;
    }
    config.validate().context("Invalid configuration")?;

    let controller = RequestController::new(generation::from_config(&config));

    if cli.prompt.is_empty() {
        run_interactive(&controller).await?;
        Ok(ExitCode::SUCCESS)
    } else {
        let status = run_once(&controller, cli.prompt.join(" ")).await?;
        Ok(ExitCode::from(exit_code(status)))
    }
}

/// Exit code for a one-shot run: 0 on Success, 1 otherwise.
fn exit_code(status: RequestStatus) -> u8 {
    if status == RequestStatus::Success {
        0
    } else {
        1
    }
}

/// Submit one prompt and wait for it to settle.
async fn run_once(
    controller: &RequestController,
    prompt: String,
) -> anyhow::Result<RequestStatus> {
    let mut updates = controller.subscribe();

    match controller.submit_prompt(prompt) {
        SubmitOutcome::Accepted => {}
        SubmitOutcome::Blank => bail!("Prompt must not be blank"),
        SubmitOutcome::Busy => bail!("A request is already in flight"),
        SubmitOutcome::NoRuntime => bail!("No async runtime available"),
    }

    print_state(&controller.state());

    let settled = wait_settled(&mut updates).await?;
    print_state(&settled);

    Ok(settled.status())
}

async fn run_interactive(controller: &RequestController) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut updates = controller.subscribe();

    eprintln!("Enter a prompt and press Enter (Ctrl-D to quit).");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                if controller.submit_prompt(line) == SubmitOutcome::Busy {
                    eprintln!("Still processing the previous prompt, input ignored.");
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                print_state(&state);
            }
        }
    }

    // Flush whatever is still pending after stdin closes.
    if controller.is_busy() || updates.has_changed().unwrap_or(false) {
        let settled = wait_settled(&mut updates).await?;
        print_state(&settled);
    }

    Ok(())
}

async fn wait_settled(updates: &mut watch::Receiver<RequestState>) -> anyhow::Result<RequestState> {
    let settled = updates
        .wait_for(|state| !state.is_loading())
        .await
        .context("Request controller went away")?;
    Ok((*settled).clone())
}

fn print_state(state: &RequestState) {
    let Some(text) = render_state(state) else {
        return;
    };
    // Progress goes to stderr so stdout only carries results.
    if state.is_loading() {
        eprintln!("{}", text);
    } else {
        println!("{}", text);
    }
}
