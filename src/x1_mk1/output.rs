use super::{Brightness, Led};
use crate::{Command, Packet};

/// The current state of all LEDs, kept in the exact layout of the packet that is sent to the
/// device.
///
/// A fresh `LedPacket` has the `DIMM_LEDS` opcode in the header and every LED at
/// [`Brightness::DIM`]. The header is never touched by any of the methods here.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LedPacket {
	packet: Packet,
}

impl LedPacket {
	pub fn new() -> Self {
		Self::filled(Brightness::DIM)
	}

	/// A packet with every LED at `brightness`
	pub fn filled(brightness: Brightness) -> Self {
		let mut self_ = Self {
			packet: Packet::new(Command::DimmLeds),
		};
		self_.fill(brightness);
		return self_;
	}

	pub fn get(&self, led: Led) -> Brightness {
		return Brightness(self.packet.as_bytes()[led.offset()]);
	}

	/// Updates a single LED's byte. Nothing else in the packet changes.
	pub fn set(&mut self, led: Led, brightness: Brightness) {
		self.packet.as_bytes_mut()[led.offset()] = brightness.0;
	}

	/// Sets every LED to the same brightness
	pub fn fill(&mut self, brightness: Brightness) {
		for byte in self.packet.as_bytes_mut()[1..].iter_mut() {
			*byte = brightness.0;
		}
	}

	/// Iterates over all LEDs and their current brightness, in packet order
	pub fn iter(&self) -> impl Iterator<Item = (Led, Brightness)> + '_ {
		Led::ALL.iter().map(move |&led| (led, self.get(led)))
	}

	pub fn as_packet(&self) -> &Packet {
		&self.packet
	}
}

impl Default for LedPacket {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::PACKET_SIZE;

	#[test]
	fn starts_dimmed_with_led_opcode() {
		let leds = LedPacket::new();
		let bytes = leds.as_packet().as_bytes();
		assert_eq!(bytes[0], Command::DimmLeds.opcode());
		assert!(bytes[1..].iter().all(|&b| b == 0x0a));
		assert!(leds.iter().all(|(_, brightness)| brightness == Brightness::DIM));
	}

	#[test]
	fn set_touches_exactly_one_byte() {
		for &led in Led::ALL.iter() {
			for &value in [0x00u8, 0x01, 0x0a, 0x40, 0x7f, 0x80, 0xff].iter() {
				let mut leds = LedPacket::new();
				let before = *leds.as_packet().as_bytes();

				leds.set(led, Brightness(value));

				let after = leds.as_packet().as_bytes();
				for i in 0..PACKET_SIZE {
					if i == led.offset() {
						assert_eq!(after[i], value);
					} else {
						assert_eq!(after[i], before[i], "{} changed byte {}", led, i);
					}
				}
				assert_eq!(leds.get(led), Brightness(value));
			}
		}
	}

	#[test]
	fn fill_keeps_the_header() {
		let mut leds = LedPacket::new();
		leds.fill(Brightness::OFF);
		let bytes = leds.as_packet().as_bytes();
		assert_eq!(bytes[0], 0x0c);
		assert!(bytes[1..].iter().all(|&b| b == 0));
		assert_eq!(LedPacket::filled(Brightness::OFF), leds);
	}
}
