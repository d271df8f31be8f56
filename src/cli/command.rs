use clap::Parser;

use crate::storage::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "rusty-addressbook", version, about = "Simple Address Book")]
pub struct Cli {
    /// Storage file (.json); takes precedence over --storage-file
    #[arg(value_name = "STORAGE_FILE")]
    pub path: Option<String>,

    /// Storage file (.json) the address book is loaded from and saved to
    #[arg(
        long = "storage-file",
        value_name = "STORAGE_FILE",
        env = "ADDRESSBOOK_STORAGE_FILE",
        default_value = DEFAULT_STORAGE_PATH
    )]
    pub storage_file: String,

    /// Keep the address book in memory only; nothing is read or written
    #[arg(long)]
    pub ephemeral: bool,

    /// Log filter used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, env = "ADDRESSBOOK_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// The storage file this session uses.
    pub fn storage_path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.storage_file)
    }
}
