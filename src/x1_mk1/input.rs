/// A report received from the device.
///
/// Inbound data isn't decoded: the device's response format isn't documented, so reports are
/// only kept as raw bytes and logged.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct Report<'a> {
	pub data: &'a [u8],
}

impl<'a> Report<'a> {
	pub fn new(data: &'a [u8]) -> Self {
		return Self { data };
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// The first byte of the report, if there is one
	pub fn header(&self) -> Option<u8> {
		self.data.first().copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn report_accessors() {
		let report = Report::new(&[0x01, 0x23, 0x45]);
		assert_eq!(report.len(), 3);
		assert_eq!(report.header(), Some(0x01));

		let empty = Report::new(&[]);
		assert!(empty.is_empty());
		assert_eq!(empty.header(), None);
	}
}
