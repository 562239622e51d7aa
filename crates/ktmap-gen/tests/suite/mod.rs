mod generate;
mod index;
