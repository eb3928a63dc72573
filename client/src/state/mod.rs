//! Client state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain struct with synchronous transitions. Pages wrap
//! them in `RwSignal`s and run the network calls the transitions ask for,
//! which keeps every rule here testable without a browser.

pub mod gym_form;
pub mod gym_list;
pub mod map;
pub mod session;
pub mod turnstiles;
