pub mod showcase_cmds;

pub use showcase_cmds::*;
