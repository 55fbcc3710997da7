//! Lifedeck library exports for testing

use clap::ValueEnum;

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Display mode of the simulator board. Supplied explicitly by the CLI or
/// config rather than derived from a route string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    #[default]
    TwoD,
    ThreeD,
}

impl Mode {
    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            Mode::TwoD => "2D",
            Mode::ThreeD => "3D",
        }
    }
}
