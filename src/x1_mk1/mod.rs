/*!
# Traktor Kontrol X1 MK1, bulk mode

The X1 MK1 has 31 single-color LEDs. All of them are driven by one 32-byte packet: the header
byte holds the `DIMM_LEDS` opcode, and each of the following 31 bytes holds the brightness of
one LED.
*/

mod controller;
pub use controller::*;

mod input;
pub use input::*;

mod output;
pub use output::*;

macro_rules! leds {
	( $( $(#[$meta:meta])* $variant:ident = $offset:literal, $name:literal; )* ) => {
		/// One of the LEDs on the X1 MK1, identified by its position in the LED packet
		#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
		#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
		pub enum Led {
			$( $(#[$meta])* $variant, )*
		}

		impl Led {
			/// Every LED, in packet order
			pub const ALL: [Led; 31] = [ $( Led::$variant, )* ];

			/// Byte offset of this LED's brightness in the LED packet. Always within `1..=31`.
			pub fn offset(self) -> usize {
				match self {
					$( Led::$variant => $offset, )*
				}
			}

			/// The name the device documentation uses, e.g. `PLAY_L`
			pub fn name(self) -> &'static str {
				match self {
					$( Led::$variant => $name, )*
				}
			}

			/// Looks up a LED by its documented name. This is meant for names arriving from
			/// outside, e.g. from a host's control bindings - in code, use the enum directly.
			pub fn from_name(name: &str) -> Option<Led> {
				match name {
					$( $name => Some(Led::$variant), )*
					_ => None,
				}
			}
		}
	};
}

leds! {
	Fx2Filter3 = 1, "FX2_FILTER3";
	Fx2Filter2 = 2, "FX2_FILTER2";
	Fx2Filter1 = 3, "FX2_FILTER1";
	Fx2On = 4, "FX2_ON";
	Fx1Filter3 = 5, "FX1_FILTER3";
	Fx1Filter2 = 6, "FX1_FILTER2";
	Fx1Filter1 = 7, "FX1_FILTER1";
	Fx1On = 8, "FX1_ON";
	SyncR = 9, "SYNC_R";
	PlayR = 10, "PLAY_R";
	/// Labelled "CUP" on the device
	CupAbsR = 11, "CUP_ABS_R";
	CueRelR = 12, "CUE_REL_R";
	BeatRightR = 13, "BEAT_RIGHT_R";
	BeatLeftR = 14, "BEAT_LEFT_R";
	TempoOutR = 15, "TEMPO_OUT_R";
	TempoInR = 16, "TEMPO_IN_R";
	TempoOutL = 17, "TEMPO_OUT_L";
	TempoInL = 18, "TEMPO_IN_L";
	BeatRightL = 19, "BEAT_RIGHT_L";
	BeatLeftL = 20, "BEAT_LEFT_L";
	/// Labelled "CUP" on the device
	CupAbsL = 21, "CUP_ABS_L";
	CueRelL = 22, "CUE_REL_L";
	SyncL = 23, "SYNC_L";
	PlayL = 24, "PLAY_L";
	Fx1MasterL = 25, "FX1_MASTER_L";
	Fx2Snap = 26, "FX2_SNAP";
	Fx1MasterR = 27, "FX1_MASTER_R";
	Fx2Quant = 28, "FX2_QUANT";
	Shift = 29, "SHIFT";
	HotcueYellow = 30, "HOTCUE_YELLOW";
	HotcueGreen = 31, "HOTCUE_GREEN";
}

impl std::fmt::Display for Led {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl std::str::FromStr for Led {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Led::from_name(s).ok_or_else(|| crate::Error::UnknownLed { name: s.to_owned() })
	}
}

/// LED brightness. The device takes values up to 0x7F; the constants are just the levels that
/// are commonly used, any byte is accepted.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brightness(pub u8);

impl Brightness {
	pub const OFF: Brightness = Self(0x00);
	pub const DIM: Brightness = Self(0x0a);
	pub const ON: Brightness = Self(0x7f);

	pub fn value(self) -> u8 {
		self.0
	}
}

impl From<u8> for Brightness {
	fn from(value: u8) -> Self {
		Self(value)
	}
}

impl From<bool> for Brightness {
	fn from(on: bool) -> Self {
		if on {
			Self::ON
		} else {
			Self::OFF
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn offsets_are_a_bijection_onto_1_to_31() {
		let mut seen = [false; crate::PACKET_SIZE];
		for led in Led::ALL.iter() {
			let offset = led.offset();
			assert!((1..=31).contains(&offset), "{} has offset {}", led, offset);
			assert!(!seen[offset], "offset {} assigned twice", offset);
			seen[offset] = true;
		}
		assert!(!seen[0]);
		assert!(seen[1..].iter().all(|&used| used));
	}

	#[test]
	fn all_is_in_packet_order() {
		for (i, led) in Led::ALL.iter().enumerate() {
			assert_eq!(led.offset(), i + 1);
		}
	}

	#[test]
	fn names_round_trip() {
		for &led in Led::ALL.iter() {
			assert_eq!(Led::from_name(led.name()), Some(led));
			assert_eq!(led.to_string().parse::<Led>().unwrap(), led);
		}
	}

	#[test]
	fn known_offsets() {
		assert_eq!(Led::PlayL.offset(), 24);
		assert_eq!(Led::Fx2Filter3.offset(), 1);
		assert_eq!(Led::HotcueGreen.offset(), 31);
		assert_eq!(Led::from_name("SHIFT"), Some(Led::Shift));
	}

	#[test]
	fn unknown_names() {
		assert_eq!(Led::from_name("play_l"), None);
		assert_eq!(Led::from_name(""), None);
		match "CUP_ABS".parse::<Led>() {
			Err(crate::Error::UnknownLed { name }) => assert_eq!(name, "CUP_ABS"),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn brightness_levels() {
		assert_eq!(Brightness::OFF.value(), 0x00);
		assert_eq!(Brightness::DIM.value(), 0x0a);
		assert_eq!(Brightness::ON.value(), 0x7f);
		assert_eq!(Brightness::from(true), Brightness::ON);
		assert_eq!(Brightness::from(false), Brightness::OFF);
		assert_eq!(Brightness::from(0x40), Brightness(0x40));
	}
}
