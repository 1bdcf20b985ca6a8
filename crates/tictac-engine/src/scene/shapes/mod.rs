pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod text;
