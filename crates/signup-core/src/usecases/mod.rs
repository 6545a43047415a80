//! Use case implementations built on the ports.

mod db_add_account;

pub use db_add_account::DbAddAccount;
