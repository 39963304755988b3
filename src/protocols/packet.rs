use super::Command;

/// Every packet exchanged with the device has exactly this many bytes
pub const PACKET_SIZE: usize = 32;

/// A single fixed-size packet as it goes over the wire. Byte 0 is the header (normally a
/// [`Command`] opcode), the remaining 31 bytes are the payload.
///
/// There's no framing, checksum or length field - the fixed size is all there is.
#[derive(Copy, Clone, Hash, Eq, PartialEq)]
pub struct Packet([u8; PACKET_SIZE]);

impl Packet {
    /// A packet with `command`'s opcode in the header and a zeroed payload
    pub fn new(command: Command) -> Self {
        let mut bytes = [0; PACKET_SIZE];
        bytes[0] = command.opcode();
        Self(bytes)
    }

    /// A packet where every single byte, including the header, is `byte`
    pub fn filled(byte: u8) -> Self {
        Self([byte; PACKET_SIZE])
    }

    pub fn from_bytes(bytes: [u8; PACKET_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn header(&self) -> u8 {
        self.0[0]
    }

    pub fn set_header(&mut self, header: u8) {
        self.0[0] = header;
    }

    /// The command named by the header byte, if it is a valid opcode
    pub fn command(&self) -> Option<Command> {
        Command::from_opcode(self.header())
    }

    pub fn payload(&self) -> &[u8] {
        &self.0[1..]
    }

    pub fn as_bytes(&self) -> &[u8; PACKET_SIZE] {
        &self.0
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8; PACKET_SIZE] {
        &mut self.0
    }
}

impl AsRef<[u8]> for Packet {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Packet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Packet[{}]", crate::util::hex(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_info_request_layout() {
        let packet = Packet::new(Command::GetDeviceInfo);
        assert_eq!(packet.header(), 0x1);
        assert_eq!(packet.command(), Some(Command::GetDeviceInfo));
        assert_eq!(packet.payload().len(), PACKET_SIZE - 1);
        assert!(packet.payload().iter().all(|&b| b == 0));
    }

    #[test]
    fn filled_covers_the_header_too() {
        let packet = Packet::filled(0x0a);
        assert_eq!(packet.as_bytes(), &[0x0a; PACKET_SIZE]);
        assert_eq!(packet.command(), None);
    }

    #[test]
    fn debug_is_a_hex_dump() {
        let mut packet = Packet::new(Command::DimmLeds);
        packet.as_bytes_mut()[31] = 0x7f;
        let dump = format!("{:?}", packet);
        assert!(dump.starts_with("Packet[0c 00 00"));
        assert!(dump.ends_with("00 7f]"));
    }

    #[test]
    fn raw_bytes_and_header_rewrite() {
        let mut bytes = [0x7f; PACKET_SIZE];
        bytes[0] = 0x05;
        let mut packet = Packet::from_bytes(bytes);
        assert_eq!(packet.command(), Some(Command::WriteIo));
        assert_eq!(AsRef::<[u8]>::as_ref(&packet), &bytes[..]);

        packet.set_header(Command::AutoMsg.opcode());
        assert_eq!(packet.command(), Some(Command::AutoMsg));
        assert_eq!(packet.payload(), &bytes[1..]);
    }
}
