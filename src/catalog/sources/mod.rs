pub mod file;
pub mod pokeapi;

pub use file::FileSource;
pub use pokeapi::PokeApiSource;
