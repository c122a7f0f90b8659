pub mod modpacks;

pub use modpacks::{all::*, pack::*, version::*};
