/// Settings of one processor instance.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Config {
    /// Write a trace line to the output before each cycle.
    pub trace: bool,
    /// Log every executed instruction at info level.
    pub verbose: bool,
}

impl Config {
    pub fn new(trace: bool, verbose: bool) -> Config {
        Config { trace, verbose }
    }
}
