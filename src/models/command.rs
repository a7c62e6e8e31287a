/// A single-tick engine command for one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Accelerate by `thrust` units toward the integer-degree `bearing_deg`.
    Thrust { thrust: i32, bearing_deg: i32 },
    /// Issue no movement this tick.
    Hold,
}

/// The outcome of one planning call: the command to transmit plus whether
/// the corrector actually found a clear course. A failed plan always
/// carries [`Command::Hold`] and means "no move issued this tick"; the
/// caller may retry with a different target or accept standing still.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub command: Command,
    pub success: bool,
}

impl Plan {
    /// A successful thrust command.
    pub fn thrust(thrust: i32, bearing_deg: i32) -> Self {
        Plan {
            command: Command::Thrust { thrust, bearing_deg },
            success: true,
        }
    }

    /// The no-op produced when the correction budget runs out.
    pub fn failed() -> Self {
        Plan {
            command: Command::Hold,
            success: false,
        }
    }
}
