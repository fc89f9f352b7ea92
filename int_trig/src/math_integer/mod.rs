pub mod normalization;
pub mod quarter_wave;
pub mod trigonometry;
