//! Preset age windows offered by the `list` command.
use clap::ValueEnum;

/// Named retrieval window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Period {
    /// Last 7 days.
    Week,
    /// Last 30 days.
    Month,
    /// Last 365 days.
    Year,
    /// Everything.
    All,
}

impl Period {
    /// Window length in days; `0` for all time.
    pub fn days(self) -> i64 {
        match self {
            Period::Week => 7,
            Period::Month => 30,
            Period::Year => 365,
            Period::All => 0,
        }
    }
}
