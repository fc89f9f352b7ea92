pub mod trigonometry;
