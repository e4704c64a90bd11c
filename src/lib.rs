//! Wavescout - music browsing web client
//!
//! A small web client for browsing music by genre, built around a
//! session-aware navigation header.
//!
//! This library provides:
//! - Genre catalog and browse-path building
//! - Pure header view-model projection (branding, menu, session controls)
//! - Cookie-backed in-memory sessions
//! - Server-rendered Dioxus UI served by axum

pub mod api;
pub mod browse;
pub mod config;
pub mod header;
pub mod session;
pub mod ui;
