//! The register snapshot a trampoline builds on the stack.

use core::mem::size_of;

use kestrel_common::vector;

/// Full register state at the moment of a trap.
///
/// Fields are in ascending stack address order: the general-purpose
/// registers pushed last by the trampoline come first, followed by the two
/// trap words and the frame the CPU pushed on entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
#[allow(missing_docs)]
pub struct TrapFrame {
    pub r15: i64,
    pub r14: i64,
    pub r13: i64,
    pub r12: i64,
    pub r11: i64,
    pub r10: i64,
    pub r9: i64,
    pub r8: i64,
    pub rbp: i64,
    pub rdi: i64,
    pub rsi: i64,
    pub rdx: i64,
    pub rcx: i64,
    pub rbx: i64,
    pub rax: i64,
    /// Vector number pushed by the trampoline
    pub trapno: i64,
    /// CPU error code, or the trampoline's zero placeholder
    pub errorcode: i64,
    pub rip: i64,
    pub cs: i64,
    pub rflags: i64,
    pub rsp: i64,
    pub ss: i64,
}

const _: () = assert!(size_of::<TrapFrame>() == 22 * 8);

impl TrapFrame {
    /// The vector number, if it names a real vector.
    pub fn vector(&self) -> Option<u8> {
        u8::try_from(self.trapno).ok()
    }

    /// The hardware error code, if the CPU supplies one for this vector.
    pub fn error_code(&self) -> Option<i64> {
        self.vector()
            .filter(|&v| vector::pushes_error_code(v))
            .map(|_| self.errorcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn test_field_order() {
        assert_eq!(offset_of!(TrapFrame, r15), 0);
        assert_eq!(offset_of!(TrapFrame, rax), 14 * 8);
        assert_eq!(offset_of!(TrapFrame, trapno), 15 * 8);
        assert_eq!(offset_of!(TrapFrame, errorcode), 16 * 8);
        assert_eq!(offset_of!(TrapFrame, rip), 17 * 8);
        assert_eq!(offset_of!(TrapFrame, cs), 18 * 8);
        assert_eq!(offset_of!(TrapFrame, rflags), 19 * 8);
        assert_eq!(offset_of!(TrapFrame, rsp), 20 * 8);
        assert_eq!(offset_of!(TrapFrame, ss), 21 * 8);
    }

    #[test]
    fn test_vector() {
        let frame = TrapFrame {
            trapno: 39,
            ..TrapFrame::default()
        };
        assert_eq!(frame.vector(), Some(39));

        let frame = TrapFrame {
            trapno: -1,
            ..TrapFrame::default()
        };
        assert_eq!(frame.vector(), None);

        let frame = TrapFrame {
            trapno: 256,
            ..TrapFrame::default()
        };
        assert_eq!(frame.vector(), None);
    }

    #[test]
    fn test_error_code() {
        let page_fault = TrapFrame {
            trapno: 14,
            errorcode: 0b10,
            ..TrapFrame::default()
        };
        assert_eq!(page_fault.error_code(), Some(0b10));

        let timer = TrapFrame {
            trapno: 32,
            errorcode: 0,
            ..TrapFrame::default()
        };
        assert_eq!(timer.error_code(), None);
    }
}
