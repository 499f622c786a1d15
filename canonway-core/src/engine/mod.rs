mod decision;
mod rules;
mod settings;
#[cfg(test)]
mod tests;

pub use decision::*;
pub use rules::*;
pub use settings::*;
