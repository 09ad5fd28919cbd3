//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gradebook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("gradebook_core ping={}", gradebook_core::ping());
    println!("gradebook_core version={}", gradebook_core::core_version());
}
