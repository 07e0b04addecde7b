//! Logo Probe Adapter
//!
//! reqwest-backed HEAD probe implementing [`crate::ports::LogoProbe`]. The
//! per-attempt timeout lives on the HTTP client, so a hung request cannot
//! block past its deadline.

mod probe;

pub use probe::HeadLogoProbe;
