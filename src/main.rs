use advisor::cli::{Cli, Command, run_projection};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = advisor::logging::init_logging(&cli.log_level) {
        eprintln!("Logging setup error: {e}");
    }

    if let Command::Serve(config) = &cli.command {
        if let Err(e) = advisor::api::run_http_server(config).await {
            tracing::error!("server error: {e}");
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
        return;
    }

    match run_projection(cli.command) {
        Ok(Some(output)) => println!("{output}"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
