pub mod breakdown;
pub mod labels;
pub mod parse;
pub mod refund;

pub use breakdown::*;
pub use labels::*;
pub use parse::*;
pub use refund::*;
