//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use roster_randomuser::DEFAULT_BASE_URL;

/// REST server for the roster user directory.
#[derive(Parser, Debug)]
#[command(name = "rosterd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to bind the HTTP server on
    #[arg(long, env = "ROSTERD_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: String,

    /// Flat file holding the user collection
    #[arg(long, env = "ROSTERD_DATA_FILE", default_value = "data/users.csv")]
    pub data_file: PathBuf,

    /// Directory where uploaded avatars are stored
    #[arg(long, env = "ROSTERD_UPLOADS_DIR", default_value = "uploads")]
    pub uploads_dir: PathBuf,

    /// Endpoint of the external random-profile API
    #[arg(long, env = "ROSTERD_RANDOM_USER_URL", default_value = DEFAULT_BASE_URL)]
    pub random_user_url: Url,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}
