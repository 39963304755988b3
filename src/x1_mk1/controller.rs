use super::{Brightness, Led, LedPacket, Report};
use crate::{Command, Compatibility, Config, Error, Packet, Transport};

/// The X1 MK1 as seen by a host application.
///
/// The host constructs one `Controller` when the device is attached and then drives it through
/// the lifecycle hooks: [`init`](Self::init) once, [`set_led`](Self::set_led) /
/// [`set_led_by_name`](Self::set_led_by_name) whenever an LED should change,
/// [`incoming_data`](Self::incoming_data) for every inbound report, and finally
/// [`shutdown`](Self::shutdown) when the device goes away.
///
/// ```
/// use kontrol_x1::{MockTransport, x1_mk1::{Brightness, Controller, Led}};
///
/// let mut controller = Controller::new(MockTransport::new());
/// controller.init("x1", false)?;
/// controller.set_led(Led::PlayL, Brightness::ON)?;
/// controller.set_led_by_name("SYNC_L", Brightness::ON)?;
/// controller.shutdown()?;
///
/// assert_eq!(controller.transport().sent().len(), 5);
/// # Ok::<(), kontrol_x1::Error>(())
/// ```
#[derive(Debug)]
pub struct Controller<T: Transport> {
	transport: T,
	leds: LedPacket,
	config: Config,
}

impl<T: Transport> Controller<T> {
	pub fn new(transport: T) -> Self {
		Self::with_config(transport, Config::default())
	}

	pub fn with_config(transport: T, config: Config) -> Self {
		Self {
			transport,
			leds: LedPacket::new(),
			config,
		}
	}

	/// Called by the host when the device is attached. Requests the device info, then dims all
	/// LEDs.
	///
	/// Passing `debug = true` turns on packet dumps for the rest of the session.
	pub fn init(&mut self, device_id: &str, debug: bool) -> crate::Result<()> {
		self.config.debug |= debug;
		log::info!("Initializing Traktor Kontrol X1 MK1 {:?} in bulk mode", device_id);

		log::debug!("Requesting device info");
		self.send(&Packet::new(Command::GetDeviceInfo))?;

		// Same packet in both compatibility modes: the old mapping did set the opcode here
		log::debug!("Dimming all LEDs");
		self.leds.fill(Brightness::DIM);
		return self.flush();
	}

	/// Called by the host when the device is detached. Turns all LEDs off.
	///
	/// In [`Compatibility::Legacy`] mode this sends nothing and fails with
	/// [`Error::ShutdownFault`], just like the old mapping crashed at this point.
	pub fn shutdown(&mut self) -> crate::Result<()> {
		log::info!("Shutting down Traktor Kontrol X1 MK1");

		if self.config.compatibility == Compatibility::Legacy {
			log::error!("Legacy shutdown: the LED shutdown packet is never built, nothing sent");
			return Err(Error::ShutdownFault);
		}

		log::debug!("Turning off all LEDs");
		self.leds.fill(Brightness::OFF);
		return self.flush();
	}

	/// Called by the host for every report the device sends. Reports are logged and handed back,
	/// nothing else happens with them.
	pub fn incoming_data<'a>(&self, data: &'a [u8]) -> Report<'a> {
		let report = Report::new(data);
		if self.config.debug {
			log::debug!("Received {} bytes: {}", report.len(), crate::util::hex(data));
		} else {
			log::trace!("Received {} bytes", report.len());
		}
		return report;
	}

	/// Sets a single LED and sends the updated LED packet.
	pub fn set_led(&mut self, led: Led, brightness: impl Into<Brightness>) -> crate::Result<()> {
		let brightness = brightness.into();
		self.leds.set(led, brightness);
		log::debug!("LED {} set to {:x}", led, brightness.0);
		return self.flush();
	}

	/// Like [`set_led`](Self::set_led), for LED names that are only known at runtime (e.g. coming
	/// from the host's control bindings).
	///
	/// An unknown name leaves the LED state untouched, sends nothing and returns
	/// [`Error::UnknownLed`].
	pub fn set_led_by_name(
		&mut self,
		name: &str,
		brightness: impl Into<Brightness>,
	) -> crate::Result<()> {
		let led = match Led::from_name(name) {
			Some(led) => led,
			None => {
				log::warn!("Unknown LED: {}", name);
				return Err(Error::UnknownLed {
					name: name.to_owned(),
				});
			}
		};
		self.set_led(led, brightness)
	}

	/// The LED state, as last sent (or about to be sent) to the device
	pub fn leds(&self) -> &LedPacket {
		&self.leds
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub fn transport_mut(&mut self) -> &mut T {
		&mut self.transport
	}

	pub fn into_transport(self) -> T {
		self.transport
	}

	fn flush(&mut self) -> crate::Result<()> {
		let packet = *self.leds.as_packet();
		return self.send(&packet);
	}

	fn send(&mut self, packet: &Packet) -> crate::Result<()> {
		if self.config.debug {
			log::debug!("Sending {}", crate::util::hex(packet.as_bytes()));
		}
		self.transport.send(packet)
	}
}
