//! Memory ordering helpers
//!
//! Compiler fences keep the optimizer from eliding or reordering stores to
//! secret state (for example the final wipe of a sponge) around code that
//! must execute unconditionally.

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }
}
