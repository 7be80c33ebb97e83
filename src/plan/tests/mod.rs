mod catalog;
mod common;
mod needs;
