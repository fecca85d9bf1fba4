use colored::Colorize;

fn main() -> std::process::ExitCode {
    match menu_ontology::cli::main() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(err.msg = %err, err.detail = ?err, "menu_onto_failed");
            eprintln!("{} {err}", "error:".red().bold());
            std::process::ExitCode::FAILURE
        }
    }
}
