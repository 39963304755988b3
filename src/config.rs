/// How closely to follow the quirks of the old scripted mapping for this controller.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compatibility {
    /// `shutdown()` turns all LEDs off with a `DIMM_LEDS` packet.
    Intended,
    /// Byte-for-byte reproduction of the old mapping: `shutdown()` fails with
    /// [`Error::ShutdownFault`](crate::Error::ShutdownFault) without sending anything.
    ///
    /// `init()` is the same in both modes.
    Legacy,
}

impl Default for Compatibility {
    fn default() -> Self {
        Self::Intended
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub compatibility: Compatibility,
    /// Log a hex dump of every packet sent and received. The host can also switch this on via
    /// the `debug` argument of `init()`.
    pub debug: bool,
}

impl Config {
    pub fn legacy() -> Self {
        Self {
            compatibility: Compatibility::Legacy,
            ..Self::default()
        }
    }
}
