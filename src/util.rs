#[macro_export]
#[doc(hidden)]
macro_rules! ok_or_continue {
	( $e:expr ) => {
		match $e {
			Ok(value) => value,
			Err(_e) => {
				continue;
			}
		}
	};
}

/// Renders bytes as space-separated lowercase hex, the way packets show up in debug logs
pub(crate) fn hex(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 3);
	for (i, byte) in bytes.iter().enumerate() {
		if i > 0 {
			out.push(' ');
		}
		out.push_str(&format!("{:02x}", byte));
	}
	return out;
}
