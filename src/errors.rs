#[derive(Debug)]
pub enum Error {
    /// A LED name arriving at the string boundary didn't match any LED on the device
    UnknownLed { name: String },
    /// `shutdown()` was called in [`Compatibility::Legacy`](crate::Compatibility::Legacy) mode,
    /// which reproduces the crash of the old mapping instead of turning the LEDs off
    ShutdownFault,
    #[cfg(feature = "usb")]
    Usb(rusb::Error),
    NoDeviceFound {
        vendor_id: u16,
        product_id: u16,
    },
    /// The device accepted fewer bytes than a full packet
    ShortWrite { written: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLed { name } => write!(f, "unknown LED {:?}", name),
            Self::ShutdownFault => f.write_str("shutdown referenced a packet that was never built"),
            #[cfg(feature = "usb")]
            Self::Usb(_) => f.write_str("USB transfer failed"),
            Self::NoDeviceFound {
                vendor_id,
                product_id,
            } => write!(
                f,
                "couldn't find a USB device {:04x}:{:04x}",
                vendor_id, product_id
            ),
            Self::ShortWrite { written } => write!(
                f,
                "device accepted {} of {} packet bytes",
                written,
                crate::PACKET_SIZE
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "usb")]
            Self::Usb(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "usb")]
impl From<rusb::Error> for Error {
    fn from(e: rusb::Error) -> Self {
        Self::Usb(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let e = Error::UnknownLed {
            name: "PLAY_X".to_owned(),
        };
        assert_eq!(e.to_string(), "unknown LED \"PLAY_X\"");

        let e = Error::NoDeviceFound {
            vendor_id: 0x17cc,
            product_id: 0x2305,
        };
        assert_eq!(e.to_string(), "couldn't find a USB device 17cc:2305");

        let e = Error::ShortWrite { written: 12 };
        assert_eq!(e.to_string(), "device accepted 12 of 32 packet bytes");
    }

    #[test]
    fn model_errors_have_no_source() {
        use std::error::Error as _;
        assert!(Error::ShutdownFault.source().is_none());
    }
}
