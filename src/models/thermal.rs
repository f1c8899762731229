//! Thermal systems models.
//!
//! This module contains models for heat rejection from powered components.

pub mod motor_cooling;
