use std::fmt::{Display, Formatter};
use std::ops::BitOr;

/// The 802.11 PHY standards a radio runs, as a bitmask.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WifiMode(u8);

impl WifiMode {
    pub const NONE: WifiMode = WifiMode(0);
    pub const A: WifiMode = WifiMode(1);
    pub const B: WifiMode = WifiMode(1 << 1);
    pub const G: WifiMode = WifiMode(1 << 2);
    pub const N: WifiMode = WifiMode(1 << 3);
    pub const AC: WifiMode = WifiMode(1 << 4);

    const NAMES: [(WifiMode, &'static str); 5] = [
        (WifiMode::A, "a"),
        (WifiMode::B, "b"),
        (WifiMode::G, "g"),
        (WifiMode::N, "n"),
        (WifiMode::AC, "ac"),
    ];

    /// Maps the device's `wlsMode` code. Unknown codes carry no standards.
    pub fn from_code(code: &str) -> WifiMode {
        match code {
            "0" => WifiMode::B,
            "1" => WifiMode::G,
            "2" => WifiMode::N,
            "3" => WifiMode::B | WifiMode::G | WifiMode::N,
            "4" => WifiMode::G | WifiMode::N,
            "5" => WifiMode::B | WifiMode::G,
            "6" => WifiMode::AC,
            "7" => WifiMode::A,
            "8" => WifiMode::A | WifiMode::N,
            "9" => WifiMode::A | WifiMode::N | WifiMode::AC,
            _ => WifiMode::NONE,
        }
    }

    pub fn contains(self, other: WifiMode) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for WifiMode {
    type Output = WifiMode;

    fn bitor(self, rhs: WifiMode) -> WifiMode {
        WifiMode(self.0 | rhs.0)
    }
}

impl Display for WifiMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let standards = WifiMode::NAMES
            .iter()
            .filter(|(mode, _)| self.contains(*mode))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>();
        write!(f, "802.11{}", standards.join("/"))
    }
}
