mod command;
pub use command::*;

mod packet;
pub use packet::*;
