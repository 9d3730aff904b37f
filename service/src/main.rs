use std::env;

use abi::Config;
use anyhow::Result;
use service::{
    cli::{self, Command, CommandError},
    init_tracing, RsvpService,
};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_tracing(&config.log);

    let service = RsvpService::from_config(&config);
    info!("front desk ready, type `help` for commands");

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("error: {e}");
                continue;
            }
        };

        match cli::execute(&service, command).await {
            Ok(output) => println!("{output}"),
            Err(e) => println!("error: {e}"),
        }
    }

    Ok(())
}
