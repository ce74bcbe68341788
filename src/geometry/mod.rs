pub(crate) mod cache;
pub(crate) mod lightning;
pub(crate) mod points;
pub(crate) mod quad;
pub(crate) mod shapes;
