use crate::wizard::state::{Dimensions, Session, State};

pub const WELCOME_MESSAGE: &str =
    "Welcome to Package Express. Please follow the instructions below.";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter a numeric value.";
pub const TOO_HEAVY_MESSAGE: &str =
    "Package too heavy to be shipped via Package Express. Have a good day.";
pub const TOO_BIG_MESSAGE: &str = "Package too big to be shipped via Package Express.";
pub const THANK_YOU_MESSAGE: &str = "Thank you!";

/// Weight strictly above this is rejected. Unit is whatever the user
/// entered; the original business rule declares none.
const MAX_WEIGHT: f64 = 50.0;
/// Summed width + height + length strictly above this is rejected.
const MAX_DIMENSION_SUM: f64 = 50.0;

/// Outcome of one step: the replacement state, the session value to carry
/// forward, and the lines to emit before the next prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub next: State,
    pub session: Session,
    pub lines: Vec<String>,
}

impl Step {
    fn retry(state: State, session: Session) -> Self {
        Self {
            next: state,
            session,
            lines: vec![INVALID_INPUT_MESSAGE.to_string()],
        }
    }

    fn go(next: State, session: Session) -> Self {
        Self {
            next,
            session,
            lines: Vec::new(),
        }
    }

    fn reject(session: Session, message: &str) -> Self {
        Self {
            next: State::End,
            session,
            lines: vec![message.to_string()],
        }
    }
}

fn parse_measurement(input: Option<&str>) -> Option<f64> {
    input.and_then(|raw| raw.trim().parse::<f64>().ok())
}

/// Executes one step of the conversation.
///
/// Pure: takes the current state and session plus the line entered at the
/// prompt (`None` for states that do not prompt) and returns the
/// replacement state, the session to carry forward, and the lines to emit.
/// Malformed input yields the same state again, so the caller's loop
/// re-issues the identical prompt; no session data changes on retry.
pub fn advance(state: State, session: Session, input: Option<&str>) -> Step {
    match state {
        State::Welcome => Step {
            next: State::WeightInput,
            session,
            lines: vec![WELCOME_MESSAGE.to_string()],
        },
        State::WeightInput => match parse_measurement(input) {
            None => Step::retry(State::WeightInput, session),
            Some(weight) if weight > MAX_WEIGHT => Step::reject(session, TOO_HEAVY_MESSAGE),
            Some(weight) => Step::go(
                State::WidthInput,
                Session {
                    weight: Some(weight),
                    ..session
                },
            ),
        },
        State::WidthInput => match parse_measurement(input) {
            None => Step::retry(State::WidthInput, session),
            Some(width) => Step::go(State::HeightInput { width }, session),
        },
        State::HeightInput { width } => match parse_measurement(input) {
            None => Step::retry(State::HeightInput { width }, session),
            Some(height) => Step::go(State::LengthInput { width, height }, session),
        },
        State::LengthInput { width, height } => match parse_measurement(input) {
            None => Step::retry(State::LengthInput { width, height }, session),
            Some(length) if width + height + length > MAX_DIMENSION_SUM => {
                Step::reject(session, TOO_BIG_MESSAGE)
            }
            Some(length) => Step::go(
                State::QuoteCalculation,
                Session {
                    dimensions: Some(Dimensions {
                        width,
                        height,
                        length,
                    }),
                    ..session
                },
            ),
        },
        State::QuoteCalculation => {
            let (weight, dimensions) = match (session.weight, session.dimensions) {
                (Some(weight), Some(dimensions)) => (weight, dimensions),
                // unreachable through the linear state path
                _ => unreachable!("weight and dimensions are collected before the quote state"),
            };
            let quote = dimensions.volume() * weight / 100.0;
            Step {
                next: State::End,
                session,
                lines: vec![
                    format!("Your estimated total for shipping this package is: ${quote:.2}"),
                    THANK_YOU_MESSAGE.to_string(),
                ],
            }
        }
        State::End => Step::go(State::End, session),
    }
}
