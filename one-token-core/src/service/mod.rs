//! Services for opening token key objects as key handles.

pub mod error;
pub mod key_service;
