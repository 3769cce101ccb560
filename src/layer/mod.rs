pub(crate) mod chain;
pub(crate) mod serie_layer;
