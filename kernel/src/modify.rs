mod borrow;

pub use self::borrow::*;
