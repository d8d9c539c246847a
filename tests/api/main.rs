mod file;
mod hello;
mod index;
mod search;
