//! Compile-time configuration, §6.
//!
//! The original source recognizes four preprocessor options
//! (`CPDQS_ISRT_THRESHOLD`, `CPDQS_PISRT_LIMIT`, `CPDQS_T9THER`, and the
//! `CPDQS_EXPORT_HEAPSORT` export switch). A `#define` has no Rust
//! equivalent with the same "resolved before the function body is even
//! parsed" property except a monomorphized generic parameter, so the three
//! numeric options become associated constants on a `Config` trait instead
//! of, say, runtime fields on a struct — the driver never pays for a branch
//! or an indirect load to read them.

/// Tunable thresholds for the pdqsort driver (§6).
///
/// Implement this on a zero-sized marker type to override the defaults,
/// e.g. to exercise the adversarial-guard property test (§8.6) at a much
/// smaller `n` than the shipped default allows.
pub trait Config {
    /// Partitions shorter than this are fully handled by insertion sort.
    const T_INS: usize = 24;
    /// Move-count budget for the partial-insertion-sort finishing attempt.
    const L: usize = 8;
    /// Partitions longer than this use Tukey's ninther for pivot
    /// selection; shorter partitions use median-of-three.
    const T_NIN: usize = 128;
}

/// The shipped thresholds (`T_ins = 24`, `L = 8`, `T_nin = 128`), matching
/// the original source's defaults exactly.
pub struct DefaultConfig;

impl Config for DefaultConfig {}
