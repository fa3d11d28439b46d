//! The shipping-quote conversation: a flat finite-state machine whose
//! transitions are pure functions over a value-threaded session, driven by
//! a console collaborator.

mod driver;
mod state;
mod transition;

pub use driver::QuoteWizard;
pub use state::{Dimensions, Session, State};
pub use transition::{advance, Step};
