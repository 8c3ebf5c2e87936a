use organize::cli::{self, OrganizeCommand};
use organize::output::OutputFormatter;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match cli::parse_args(env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            // Help and version are reported through the error path too.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    cli::init_logging(args.verbose);

    let (target, dry_run) = match args.into_command() {
        OrganizeCommand::Help => {
            cli::print_help();
            return ExitCode::SUCCESS;
        }
        OrganizeCommand::Organize { target, dry_run } => (target, dry_run),
    };

    let self_path = match env::current_exe() {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!(error = %e, "cannot determine the running executable");
            None
        }
    };

    match cli::run_cli(&target, self_path.as_deref(), dry_run) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            OutputFormatter::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
