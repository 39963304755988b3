/*!
Bindings for the LEDs of the Native Instruments Traktor Kontrol X1 MK1, driven in bulk mode.

All communication with the device happens through fixed-size 32-byte [`Packet`]s, whose first
byte is the opcode of a [`Command`]. The 31 LEDs of the X1 MK1 are set all at once with a single
`DIMM_LEDS` packet; [`x1_mk1::LedPacket`] keeps that packet around and updates it in place.

# Driving the controller

A host application creates a [`x1_mk1::Controller`] when the device is attached and calls its
lifecycle hooks. Packets go out through a [`Transport`]: [`usb::UsbTransport`] for the real
device (requires the `usb` feature), or [`MockTransport`] to just record what would be sent.

```
use kontrol_x1::{MockTransport, x1_mk1::{Brightness, Controller, Led}};

let mut controller = Controller::new(MockTransport::new());
controller.init("x1", false)?;

// Light up both play buttons
controller.set_led(Led::PlayL, Brightness::ON)?;
controller.set_led(Led::PlayR, Brightness::ON)?;

// Names coming from outside are checked at runtime
assert!(controller.set_led_by_name("PLAY_C", Brightness::ON).is_err());

controller.shutdown()?;
# Ok::<(), kontrol_x1::Error>(())
```

# Compatibility with the old scripted mapping

The scripted mapping this crate replaces crashed in its shutdown hook before sending anything, so
the LEDs stayed lit after detaching. This is fixed by default; [`Compatibility::Legacy`]
reproduces it.
*/

mod util;

mod config;
pub use config::*;

mod errors;
pub use errors::*;

mod protocols;
pub use protocols::*;

mod transport;
pub use transport::*;

#[cfg(feature = "usb")]
pub mod usb;

pub mod x1_mk1;

pub mod prelude {
    pub use crate::transport::Transport;
    pub use crate::x1_mk1::{Brightness, Controller, Led};
}
