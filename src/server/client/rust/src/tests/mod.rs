/* src/server/client/rust/src/tests/mod.rs */

mod support;
mod write;
