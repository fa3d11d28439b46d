/// Package measurements collected by the wizard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub length: f64,
}

impl Dimensions {
    pub fn sum(&self) -> f64 {
        self.width + self.height + self.length
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }
}

/// Session data carried across states, threaded by value through each
/// transition rather than mutated in place.
///
/// `weight` is set once the weight step passes validation; `dimensions`
/// once all three measurements pass the combined size rule.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Session {
    pub weight: Option<f64>,
    pub dimensions: Option<Dimensions>,
}

/// One of the wizard's conversation states.
///
/// The dimension steps are three flat states; each carries only the
/// measurements collected so far, which reach the [`Session`] only after
/// all three pass the combined size rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum State {
    Welcome,
    WeightInput,
    WidthInput,
    HeightInput { width: f64 },
    LengthInput { width: f64, height: f64 },
    QuoteCalculation,
    End,
}

impl State {
    /// The prompt issued before this state consumes a line, if it does.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            State::WeightInput => Some("Please enter the package weight:"),
            State::WidthInput => Some("Please enter the package width:"),
            State::HeightInput { .. } => Some("Please enter the package height:"),
            State::LengthInput { .. } => Some("Please enter the package length:"),
            State::Welcome | State::QuoteCalculation | State::End => None,
        }
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt().is_some()
    }

    pub fn is_end(&self) -> bool {
        matches!(self, State::End)
    }

    /// Stable name used in transition logs.
    pub fn name(&self) -> &'static str {
        match self {
            State::Welcome => "Welcome",
            State::WeightInput => "WeightInput",
            State::WidthInput => "WidthInput",
            State::HeightInput { .. } => "HeightInput",
            State::LengthInput { .. } => "LengthInput",
            State::QuoteCalculation => "QuoteCalculation",
            State::End => "End",
        }
    }
}
