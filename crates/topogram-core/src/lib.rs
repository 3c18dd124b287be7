//! Topogram Core Types and Definitions
//!
//! This crate provides the foundational types for Topogram architecture
//! diagrams. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color validation with CSS color support ([`color::Color`])
//! - **Styles**: Visual categories for nodes, edges, and clusters ([`style`] module)
//! - **Semantic**: The semantic diagram model ([`semantic`] module)

pub mod color;
pub mod identifier;
pub mod semantic;
pub mod style;
