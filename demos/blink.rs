//! Walks a light through every LED of a connected X1 MK1, then turns everything off.
//!
//! Run with `RUST_LOG=debug cargo run --example blink --features usb`

use std::time::Duration;

use kontrol_x1::usb::UsbTransport;
use kontrol_x1::x1_mk1::{Brightness, Controller, Led};

fn main() -> Result<(), kontrol_x1::Error> {
    env_logger::init();

    let mut controller = Controller::new(UsbTransport::open()?);
    controller.init("blink", true)?;

    let mut buf = [0u8; 64];
    for &led in Led::ALL.iter() {
        controller.set_led(led, Brightness::ON)?;
        std::thread::sleep(Duration::from_millis(80));
        controller.set_led(led, Brightness::DIM)?;

        let n = controller.transport().read(&mut buf)?;
        if n > 0 {
            controller.incoming_data(&buf[..n]);
        }
    }

    controller.shutdown()?;
    Ok(())
}
