pub mod compression;
pub mod leptos_owner;
pub mod panic_hook;
pub mod session;
