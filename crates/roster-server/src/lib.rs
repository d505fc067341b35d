//! roster-server - REST surface for the roster user directory.
//!
//! The binary (`rosterd`) wires a [`roster_file::FileStore`] and a
//! [`roster_randomuser::RandomUserClient`] into an actix-web application;
//! everything here is routing, extraction, and error translation.

pub mod cli;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod uploads;
