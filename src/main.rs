use clap::Parser;
use readme_publish::cli::Cli;
use readme_publish::{output, publish};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();

    let root = match publish::resolve_root(cli.root()) {
        Ok(root) => root,
        Err(error) => {
            output::print_failure(&error, &config);
            return ExitCode::from(output::exit_status(&error));
        }
    };
    output::print_working_dir(&root, &config);

    let progress = output::PublishProgress::new(&config);
    match publish::publish(&root, &config, &progress) {
        Ok(outcome) => {
            output::print_outcome(&outcome, &config);
            ExitCode::SUCCESS
        }
        Err(error) => {
            progress.abandon();
            output::print_failure(&error, &config);
            ExitCode::from(output::exit_status(&error))
        }
    }
}
