mod cons;
mod empty;
mod many;
mod one;

pub use cons::Cons;
pub use empty::Empty;
pub use many::Many;
pub use one::One;
