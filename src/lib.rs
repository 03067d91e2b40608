//! Local web server for a browser-based music player.
//!
//! Serves the player page and its script, exposes the queue-control file
//! for polling, and mints the ES256 developer tokens the Apple Music API
//! requires. Everything is plain HTTP/1.1 on a loopback-friendly port;
//! the server is meant to sit next to the files it serves.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod token;

#[cfg(test)]
pub(crate) mod testutil;
