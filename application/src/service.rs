mod book;
mod borrow;
mod user;

pub use self::{book::*, borrow::*, user::*};
