pub mod registry;

pub mod cd;
pub mod echo;
pub mod system;
pub mod type_cmd;
