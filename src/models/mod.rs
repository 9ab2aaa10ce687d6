mod product;
mod sale;

pub use product::*;
pub use sale::*;
