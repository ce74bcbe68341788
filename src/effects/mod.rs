pub(crate) mod meteor;
