pub mod macros;
