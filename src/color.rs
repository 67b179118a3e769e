pub(crate) mod cmyk;
