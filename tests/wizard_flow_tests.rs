use insta::assert_snapshot;
use package_express::cli::ScriptedConsole;
use package_express::errors::WizardError;
use package_express::wizard::QuoteWizard;

fn run_session(inputs: &[&str]) -> String {
    let mut wizard = QuoteWizard::new(ScriptedConsole::new(inputs.iter().copied()));
    wizard.run().expect("session should run to completion");
    wizard.into_console().transcript()
}

#[test]
fn full_session_produces_quote() {
    assert_snapshot!(run_session(&["10", "2", "2", "2"]), @r"
    Welcome to Package Express. Please follow the instructions below.
    Please enter the package weight:
    Please enter the package width:
    Please enter the package height:
    Please enter the package length:
    Your estimated total for shipping this package is: $0.80
    Thank you!
    ");
}

#[test]
fn overweight_package_is_rejected_before_dimensions() {
    assert_snapshot!(run_session(&["60"]), @r"
    Welcome to Package Express. Please follow the instructions below.
    Please enter the package weight:
    Package too heavy to be shipped via Package Express. Have a good day.
    ");
}

#[test]
fn oversized_package_is_rejected_after_length() {
    assert_snapshot!(run_session(&["5", "20", "20", "20"]), @r"
    Welcome to Package Express. Please follow the instructions below.
    Please enter the package weight:
    Please enter the package width:
    Please enter the package height:
    Please enter the package length:
    Package too big to be shipped via Package Express.
    ");
}

#[test]
fn malformed_weight_reissues_the_same_prompt() {
    assert_snapshot!(run_session(&["abc", "10", "2", "2", "2"]), @r"
    Welcome to Package Express. Please follow the instructions below.
    Please enter the package weight:
    Invalid input. Please enter a numeric value.
    Please enter the package weight:
    Please enter the package width:
    Please enter the package height:
    Please enter the package length:
    Your estimated total for shipping this package is: $0.80
    Thank you!
    ");
}

#[test]
fn malformed_dimension_reissues_only_that_sub_step() {
    assert_snapshot!(run_session(&["10", "2", "oops", "2", "2"]), @r"
    Welcome to Package Express. Please follow the instructions below.
    Please enter the package weight:
    Please enter the package width:
    Please enter the package height:
    Invalid input. Please enter a numeric value.
    Please enter the package height:
    Please enter the package length:
    Your estimated total for shipping this package is: $0.80
    Thank you!
    ");
}

#[test]
fn repeated_garbage_keeps_retrying_the_same_prompt() {
    let transcript = run_session(&["x", "y", "z", "60"]);
    let invalid = transcript
        .lines()
        .filter(|line| *line == "Invalid input. Please enter a numeric value.")
        .count();
    let weight_prompts = transcript
        .lines()
        .filter(|line| *line == "Please enter the package weight:")
        .count();
    assert_eq!(invalid, 3);
    assert_eq!(weight_prompts, 4);
}

#[test]
fn boundary_values_are_accepted() {
    // weight 50 and a dimension sum of exactly 50 both pass
    assert_snapshot!(run_session(&["50", "10", "20", "20"]), @r"
    Welcome to Package Express. Please follow the instructions below.
    Please enter the package weight:
    Please enter the package width:
    Please enter the package height:
    Please enter the package length:
    Your estimated total for shipping this package is: $2000.00
    Thank you!
    ");
}

#[test]
fn exhausted_input_reports_closed_stream() {
    let mut wizard = QuoteWizard::new(ScriptedConsole::new(["10", "2"]));
    let err = wizard.run().unwrap_err();
    assert!(matches!(err, WizardError::InputClosed));

    let console = wizard.into_console();
    let last = console.outputs().last().cloned().unwrap_or_default();
    assert_eq!(last, "Please enter the package height:");
}
