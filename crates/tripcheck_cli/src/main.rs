//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tripcheck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("tripcheck_core ping={}", tripcheck_core::ping());
    println!("tripcheck_core version={}", tripcheck_core::core_version());
}
