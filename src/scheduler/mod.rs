pub mod autoclose;
