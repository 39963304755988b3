/*!
Bulk-mode USB transport, using `rusb`. Only available with the `usb` feature.
*/

use std::time::Duration;

use rusb::{Device, DeviceHandle, GlobalContext};

use crate::{ok_or_continue, Error, Packet, Transport, PACKET_SIZE};

/// Native Instruments
pub const VENDOR_ID: u16 = 0x17cc;
/// Traktor Kontrol X1 MK1
pub const PRODUCT_ID: u16 = 0x2305;

/// Where and how to reach the device. The defaults address the X1 MK1.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsbConfig {
    pub vendor_id: u16,
    pub product_id: u16,
    pub interface: u8,
    /// Bulk OUT endpoint address
    pub out_endpoint: u8,
    /// Bulk IN endpoint address
    pub in_endpoint: u8,
    pub timeout: Duration,
}

impl Default for UsbConfig {
    fn default() -> Self {
        Self {
            vendor_id: VENDOR_ID,
            product_id: PRODUCT_ID,
            interface: 0,
            out_endpoint: 0x01,
            in_endpoint: 0x81,
            timeout: Duration::from_millis(200),
        }
    }
}

pub struct UsbTransport {
    handle: DeviceHandle<GlobalContext>,
    config: UsbConfig,
}

impl UsbTransport {
    /// Opens the first connected X1 MK1
    pub fn open() -> crate::Result<Self> {
        Self::open_with(UsbConfig::default())
    }

    pub fn open_with(config: UsbConfig) -> crate::Result<Self> {
        let device = find_device(config.vendor_id, config.product_id)?;
        let handle = open_handle(device, config.interface)?;
        log::info!(
            "Opened USB device {:04x}:{:04x}, interface {}",
            config.vendor_id,
            config.product_id,
            config.interface
        );

        Ok(Self { handle, config })
    }

    pub fn config(&self) -> &UsbConfig {
        &self.config
    }

    /// Reads one report from the bulk IN endpoint into `buf`. A timeout is not an error, it just
    /// means there was nothing to read, and returns `Ok(0)`.
    pub fn read(&self, buf: &mut [u8]) -> crate::Result<usize> {
        match self
            .handle
            .read_bulk(self.config.in_endpoint, buf, self.config.timeout)
        {
            Ok(n) => Ok(n),
            Err(rusb::Error::Timeout) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

impl Transport for UsbTransport {
    fn send(&mut self, packet: &Packet) -> crate::Result<()> {
        let written = self.handle.write_bulk(
            self.config.out_endpoint,
            packet.as_bytes(),
            self.config.timeout,
        )?;

        if written != PACKET_SIZE {
            return Err(Error::ShortWrite { written });
        }
        Ok(())
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if let Err(e) = self.handle.release_interface(self.config.interface) {
            log::warn!("Couldn't release interface {}: {}", self.config.interface, e);
        }
    }
}

fn find_device(vendor_id: u16, product_id: u16) -> crate::Result<Device<GlobalContext>> {
    for device in rusb::devices()?.iter() {
        let desc = ok_or_continue!(device.device_descriptor());
        if desc.vendor_id() == vendor_id && desc.product_id() == product_id {
            return Ok(device);
        }
    }

    Err(Error::NoDeviceFound {
        vendor_id,
        product_id,
    })
}

fn open_handle(
    device: Device<GlobalContext>,
    interface: u8,
) -> crate::Result<DeviceHandle<GlobalContext>> {
    let mut handle = device.open()?;
    // Not supported on every platform, and the kernel driver may not be bound anyway
    if let Err(e) = handle.set_auto_detach_kernel_driver(true) {
        log::debug!("Kernel driver auto-detach unavailable: {}", e);
    }
    handle.claim_interface(interface)?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_address_the_x1_mk1() {
        let config = UsbConfig::default();
        assert_eq!((config.vendor_id, config.product_id), (0x17cc, 0x2305));
        assert_eq!(config.interface, 0);
        // IN endpoints have the direction bit set
        assert_eq!(config.in_endpoint & 0x80, 0x80);
        assert_eq!(config.out_endpoint & 0x80, 0);
    }
}
