pub(crate) mod center;
pub(crate) mod compiler;
pub(crate) mod mapping;
pub(crate) mod uniqify;
