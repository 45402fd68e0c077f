pub mod fade;
