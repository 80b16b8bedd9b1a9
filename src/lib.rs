//! Vitae - a digital resume in the terminal
//!
//! This library fetches a profile, work history, skills, projects, education
//! and achievements from a REST service (or a local JSON fixture) and renders
//! them as five animated tabs built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`backend`] - Read-only resume data sources (HTTP and fixture)
//! * [`entities`] - Resume records as returned by the service
//! * [`view_state`] - Load state, skill categories, detail overlay
//! * [`animation`] - Entrance animations sampled from a mount clock
//! * [`platform`] - Opening links and the haptic bell
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Reveal, spring and grow animations plus stagger presets
pub mod animation;

/// Backend abstraction over the resume service
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Resume records: profile, experience, skills, projects, education, achievements
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Link opening and haptic feedback
pub mod platform;

/// Colors and spacing shared by every screen
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colors, tags and other helpers
pub mod utils;

/// Per-screen state derived from loaded entities
pub mod view_state;
