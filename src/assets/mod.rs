pub(crate) mod decode;
pub(crate) mod image_data;
