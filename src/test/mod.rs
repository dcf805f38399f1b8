//! Support code shared by the in-crate test suites.

pub(crate) mod quick;
