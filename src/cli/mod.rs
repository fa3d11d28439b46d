mod io;

pub use io::{Console, ScriptedConsole, StdioConsole};
