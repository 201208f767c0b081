//! Runtime configuration read from the environment.

pub mod db;
