pub mod input_text;
