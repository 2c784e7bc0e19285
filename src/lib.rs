//! # bestellung
//!
//! One-page A4 purchase-order PDF generator: a deterministic document layout
//! engine with German monetary formatting, VAT totals, and optional delivery
//! via Microsoft Graph (OneDrive upload + mail with attachment).
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Page geometry is expressed in millimeters and converted to PDF points only
//! at the drawing boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use bestellung::core::*;
//! use bestellung::pdf::compose;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let meta = OrderMetaBuilder::new("B-2026-042", NaiveDate::from_ymd_opt(2026, 8, 20).unwrap())
//!     .contact_person("Maurice Vennegerts")
//!     .bill_to("Rotogal GmbH\nDorfstr. 77\n49848 Wilsum\nGermany")
//!     .vat("ESN0300033H", dec!(0.21))
//!     .build()
//!     .unwrap();
//!
//! let mut lines = OrderLines::new();
//! lines.push(
//!     LineItemBuilder::bins(2, dec!(385.00))
//!         .model("BI-565")
//!         .color(Color::Blue)
//!         .wall_build(WallBuild::Epe)
//!         .build()
//!         .unwrap(),
//! );
//!
//! let document = compose(&meta, &lines).unwrap();
//! assert!(document.as_bytes().starts_with(b"%PDF"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Order types, builders, normalization, totals |
//! | `pdf` (default) | A4 page composition via `lopdf` |
//! | `graph` | Microsoft Graph delivery (OneDrive + sendMail) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "graph")]
pub mod graph;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
