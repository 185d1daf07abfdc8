use citadel_gateway::{cli, logging};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::ScanCli::parse();
    logging::init(&cli.output);

    let exit_code = match cli::scan::handle_scan(cli.args).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("{}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}
