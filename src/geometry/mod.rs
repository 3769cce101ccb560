pub(crate) mod layout;
pub(crate) mod polygon;
pub(crate) mod web;
