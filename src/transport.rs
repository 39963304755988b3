use crate::Packet;

/// The channel that physically delivers packets to the device.
///
/// Sending is fire-and-forget: implementations report failure, but nothing in this crate retries
/// or waits for an answer.
pub trait Transport {
    fn send(&mut self, packet: &Packet) -> crate::Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, packet: &Packet) -> crate::Result<()> {
        (**self).send(packet)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, packet: &Packet) -> crate::Result<()> {
        (**self).send(packet)
    }
}

/// A transport that doesn't talk to any hardware but keeps every sent packet, in order.
///
/// Useful for dry runs and for checking what would have been sent to the device.
#[derive(Debug, Default, Clone)]
pub struct MockTransport {
    sent: Vec<Packet>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// All packets sent so far, oldest first
    pub fn sent(&self) -> &[Packet] {
        &self.sent
    }

    pub fn last(&self) -> Option<&Packet> {
        self.sent.last()
    }

    /// Removes and returns all packets sent so far
    pub fn take(&mut self) -> Vec<Packet> {
        std::mem::take(&mut self.sent)
    }
}

impl Transport for MockTransport {
    fn send(&mut self, packet: &Packet) -> crate::Result<()> {
        self.sent.push(*packet);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;

    #[test]
    fn mock_keeps_order() {
        let mut transport = MockTransport::new();
        transport.send(&Packet::new(Command::GetDeviceInfo)).unwrap();
        transport.send(&Packet::new(Command::DimmLeds)).unwrap();

        let headers: Vec<u8> = transport.sent().iter().map(Packet::header).collect();
        assert_eq!(headers, [0x1, 0xc]);
        assert_eq!(transport.last().map(Packet::header), Some(0xc));

        assert_eq!(transport.take().len(), 2);
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn borrowed_and_boxed_transports_forward() {
        fn send_one<T: Transport>(mut transport: T) {
            transport.send(&Packet::filled(0)).unwrap();
        }

        let mut transport = MockTransport::new();
        send_one(&mut transport);
        assert_eq!(transport.sent().len(), 1);

        let boxed: Box<dyn Transport> = Box::new(MockTransport::new());
        send_one(boxed);
    }
}
