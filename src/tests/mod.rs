mod console;
mod helper;
