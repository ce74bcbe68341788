pub(crate) mod cache;
pub(crate) mod glow;
pub(crate) mod hex;
