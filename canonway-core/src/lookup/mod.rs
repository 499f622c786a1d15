mod alias;
mod term;
#[cfg(test)]
mod tests;

pub use alias::*;
pub use term::*;
