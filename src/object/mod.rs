pub(crate) mod media;
pub(crate) mod model;
pub(crate) mod shapes;
