use std::net::{IpAddr, SocketAddr};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio_testing::{function, web3forms};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Web3forms {
            host,
            port,
            access_key,
        } => web3forms::start_server(SocketAddr::new(host, port), access_key).await?,
        Command::Function {
            host,
            port,
            api_key,
        } => function::start_server(SocketAddr::new(host, port), api_key).await?,
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the web3forms testing server
    Web3forms {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8001")]
        port: u16,
        #[arg(long, default_value = "test-access-key")]
        access_key: String,
    },
    /// Start the relay function testing server
    Function {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8002")]
        port: u16,
        /// Require this key in the `apikey` header
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}
