//! HR Board: announcement, attendance and leave administration screens.
//!
//! Screens are event-driven controllers over in-memory collections. They
//! render Askama fragments and hand them to a [`surface::DisplaySurface`],
//! which is the only thing that knows how markup reaches the user.

pub mod controllers;
pub mod errors;
pub mod models;
pub mod surface;
pub mod templates_structs;
