pub(crate) mod assembly;
pub(crate) mod page;
pub(crate) mod pipeline;
