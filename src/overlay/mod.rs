pub(crate) mod blend;
pub(crate) mod blit;
pub(crate) mod payload;
