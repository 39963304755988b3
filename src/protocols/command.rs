/// The commands understood by the X1 MK1 in bulk mode. The command's opcode always goes into the
/// first byte of an outgoing [`Packet`](crate::Packet).
///
/// Opcodes are not contiguous: 0x8 and 0xA aren't assigned to anything.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    GetDeviceInfo,
    ReadErp,
    ReadAnalog,
    ReadIo,
    WriteIo,
    MidiRead,
    MidiWrite,
    AudioParams,
    AutoMsg,
    /// Writes the brightness of all 31 LEDs at once
    DimmLeds,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Self::GetDeviceInfo,
        Self::ReadErp,
        Self::ReadAnalog,
        Self::ReadIo,
        Self::WriteIo,
        Self::MidiRead,
        Self::MidiWrite,
        Self::AudioParams,
        Self::AutoMsg,
        Self::DimmLeds,
    ];

    pub fn opcode(self) -> u8 {
        match self {
            Self::GetDeviceInfo => 0x1,
            Self::ReadErp => 0x2,
            Self::ReadAnalog => 0x3,
            Self::ReadIo => 0x4,
            Self::WriteIo => 0x5,
            Self::MidiRead => 0x6,
            Self::MidiWrite => 0x7,
            Self::AudioParams => 0x9,
            Self::AutoMsg => 0xb,
            Self::DimmLeds => 0xc,
        }
    }

    /// Returns `None` for bytes that aren't an opcode of any command
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|cmd| cmd.opcode() == opcode)
    }

    /// The symbolic name used in the device documentation, e.g. `GET_DEVICE_INFO`
    pub fn name(self) -> &'static str {
        match self {
            Self::GetDeviceInfo => "GET_DEVICE_INFO",
            Self::ReadErp => "READ_ERP",
            Self::ReadAnalog => "READ_ANALOG",
            Self::ReadIo => "READ_IO",
            Self::WriteIo => "WRITE_IO",
            Self::MidiRead => "MIDI_READ",
            Self::MidiWrite => "MIDI_WRITE",
            Self::AudioParams => "AUDIO_PARAMS",
            Self::AutoMsg => "AUTO_MSG",
            Self::DimmLeds => "DIMM_LEDS",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
