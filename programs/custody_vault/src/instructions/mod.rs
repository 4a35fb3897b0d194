pub mod close;
pub mod deposit;
pub mod initialize;
pub mod withdraw;

pub use close::*;
pub use deposit::*;
pub use initialize::*;
pub use withdraw::*;
