use std::process;

use package_express::{cli::StdioConsole, errors::WizardError, init, wizard::QuoteWizard};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), WizardError> {
    let mut wizard = QuoteWizard::new(StdioConsole);
    wizard.run()
}
