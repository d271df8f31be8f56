use crate::{
    cli::command::Cli,
    errors::AppError,
    logging,
    logic::Logic,
    messages::MESSAGE_USING_EPHEMERAL_STORAGE,
    storage::{Storage, StorageStub, open_storage},
    ui::{CycleOutcome, Presenter, Stoppable},
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

pub const VERSION: &str = concat!("Version ", env!("CARGO_PKG_VERSION"));

/// The running application as seen by the presenter.
#[derive(Debug)]
pub struct Host {
    running: bool,
}

impl Host {
    pub fn new() -> Self {
        Self { running: true }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

impl Stoppable for Host {
    fn stop(&mut self) {
        info!("stopping");
        self.running = false;
    }
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&cli, stdin.lock(), stdout.lock())
}

/// Loads the address book and runs command cycles over `input` until the
/// user exits or the input ends.
pub fn run_session<R, W>(cli: &Cli, mut input: R, mut output: W) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let mut presenter = Presenter::new();
    let storage = init_storage(cli, &mut presenter);

    let mut logic = match Logic::new(storage) {
        Ok(logic) => logic,
        Err(e) => {
            error!(error = %e, "could not load the address book");
            return Err(e);
        }
    };
    info!(
        path = logic.storage_path(),
        contacts = logic.address_book().len(),
        "address book ready"
    );

    presenter.display_welcome_message(VERSION, logic.storage_path());
    write!(output, "{}", presenter.output())?;

    let mut host = Host::new();
    while host.is_running() {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        presenter.set_command_input(line.trim_end());

        match presenter.on_command(&mut logic, &mut host) {
            Ok(CycleOutcome::Exit) => {}
            Ok(CycleOutcome::Continue) => write!(output, "{}", presenter.output())?,
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "command not applied");
                write!(output, "{}", presenter.output())?;
            }
            Err(e) => {
                error!(error = %e, "command failed");
                write!(output, "{}", presenter.output())?;
                output.flush()?;
                return Err(e);
            }
        }
    }

    output.flush()?;
    Ok(())
}

fn init_storage(cli: &Cli, presenter: &mut Presenter) -> Box<dyn Storage> {
    match open_storage(cli.storage_path(), cli.ephemeral) {
        Ok(storage) => {
            if cli.ephemeral {
                presenter.display(&[MESSAGE_USING_EPHEMERAL_STORAGE]);
            }
            storage
        }
        Err(e) => {
            warn!(error = %e, "falling back to in-memory storage");
            presenter.display(&[&e.to_string(), MESSAGE_USING_EPHEMERAL_STORAGE]);
            Box::new(StorageStub::new(cli.storage_path()))
        }
    }
}
