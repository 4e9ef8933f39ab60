pub mod inventory_cmds;

pub use inventory_cmds::*;
