use citadel_gateway::{cli, logging};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::MockCli::parse();
    logging::init(&cli.output);

    if let Err(e) = cli::serve::handle_serve(cli.args).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
