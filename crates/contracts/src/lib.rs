//! Framework-free core of the rental admin: identity and authorization
//! types, the session controller, the preference store and the route gate.

pub mod routes;
pub mod shared;
pub mod system;

#[cfg(test)]
mod testing;
