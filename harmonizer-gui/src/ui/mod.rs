//! # UI Module
//!
//! This module contains all UI components for the Harmonizer window.

pub mod main_display;
