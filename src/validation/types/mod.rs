//! Validated wrapper types.
//!
//! These newtypes can only be constructed by passing the corresponding rule,
//! so holding one is proof the value was validated.

mod email;
mod username;

pub use email::Email;
pub use username::Username;
