//! Shared helpers for factory methods.
//!
//! Currently just the process-wide counter behind the unique identifying
//! fields that factories generate.

/// Process-wide counter backing generated test identifiers.
///
/// Factories fold the counter value into names and student numbers so that
/// records created in the same test never collide with each other.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns the next counter value.
///
/// Values increase monotonically across all factories in the process.
///
/// # Returns
/// - `u64` - Monotonically increasing counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
