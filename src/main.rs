use clap::Parser;
use std::process::ExitCode;
use zscaler_egress_ips::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    let target = match zscaler_egress_ips::logging::init(cli.log_level(), cli.log_config.as_deref()) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("Error initializing logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match zscaler_egress_ips::run(&cli.config()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            // A log4rs file may route everything to files only
            if !target.is_stderr() {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
