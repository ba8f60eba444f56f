// Hindi-specific language data and helpers

pub(crate) mod constants;
pub mod stemmer;
