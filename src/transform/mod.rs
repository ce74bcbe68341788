pub(crate) mod perspective;
