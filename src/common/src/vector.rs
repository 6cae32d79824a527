//! Interrupt vector numbering.
//!
//! Vectors 0..=31 are reserved for CPU exceptions. The primary 8259 is
//! remapped so that IRQ0..=7 arrive on vectors 32..=39.

/// Divide error (#DE).
pub const DIVIDE_ERROR: u8 = 0;
/// Debug exception (#DB).
pub const DEBUG: u8 = 1;
/// Non-maskable interrupt.
pub const NMI: u8 = 2;
/// Breakpoint (#BP).
pub const BREAKPOINT: u8 = 3;
/// Overflow (#OF).
pub const OVERFLOW: u8 = 4;
/// Bound range exceeded (#BR).
pub const BOUND_RANGE: u8 = 5;
/// Invalid opcode (#UD).
pub const INVALID_OPCODE: u8 = 6;
/// Device not available (#NM).
pub const DEVICE_NOT_AVAILABLE: u8 = 7;
/// Double fault (#DF).
pub const DOUBLE_FAULT: u8 = 8;
/// Coprocessor segment overrun, legacy.
pub const COPROCESSOR_SEGMENT: u8 = 9;
/// Invalid TSS (#TS).
pub const INVALID_TSS: u8 = 10;
/// Segment not present (#NP).
pub const SEGMENT_NOT_PRESENT: u8 = 11;
/// Stack-segment fault (#SS).
pub const STACK_SEGMENT: u8 = 12;
/// General protection fault (#GP).
pub const GENERAL_PROTECTION: u8 = 13;
/// Page fault (#PF).
pub const PAGE_FAULT: u8 = 14;
/// x87 floating-point exception (#MF).
pub const X87_FPU: u8 = 16;
/// Alignment check (#AC).
pub const ALIGNMENT_CHECK: u8 = 17;
/// Machine check (#MC).
pub const MACHINE_CHECK: u8 = 18;
/// SIMD floating-point exception (#XM).
pub const SIMD_FP: u8 = 19;
/// Virtualization exception (#VE).
pub const VIRTUALIZATION: u8 = 20;
/// Control protection exception (#CP).
pub const CONTROL_PROTECTION: u8 = 21;
/// Hypervisor injection exception.
pub const HYPERVISOR_INJECTION: u8 = 28;
/// VMM communication exception (#VC).
pub const VMM_COMMUNICATION: u8 = 29;
/// Security exception (#SX).
pub const SECURITY_EXCEPTION: u8 = 30;

/// Timer tick, IRQ0.
pub const TIMER: u8 = 32;
/// IRQ7, checked for spurious delivery.
pub const SPURIOUS_CHECK: u8 = 39;

/// Every vector that gets a gate. All other slots stay absent.
pub const SUPPORTED: [u8; 20] = [
    DIVIDE_ERROR,
    DEBUG,
    NMI,
    BREAKPOINT,
    OVERFLOW,
    BOUND_RANGE,
    INVALID_OPCODE,
    DEVICE_NOT_AVAILABLE,
    DOUBLE_FAULT,
    INVALID_TSS,
    SEGMENT_NOT_PRESENT,
    STACK_SEGMENT,
    GENERAL_PROTECTION,
    PAGE_FAULT,
    X87_FPU,
    ALIGNMENT_CHECK,
    MACHINE_CHECK,
    SIMD_FP,
    TIMER,
    SPURIOUS_CHECK,
];

/// Returns `true` if `vector` is wired up by this kernel.
pub fn is_supported(vector: u8) -> bool {
    SUPPORTED.contains(&vector)
}

/// Returns `true` if the CPU pushes an error code when delivering `vector`.
pub fn pushes_error_code(vector: u8) -> bool {
    matches!(
        vector,
        DOUBLE_FAULT
            | INVALID_TSS
            | SEGMENT_NOT_PRESENT
            | STACK_SEGMENT
            | GENERAL_PROTECTION
            | PAGE_FAULT
            | ALIGNMENT_CHECK
            | CONTROL_PROTECTION
            | VMM_COMMUNICATION
            | SECURITY_EXCEPTION
    )
}

/// Human readable name of `vector`.
pub fn name(vector: u8) -> &'static str {
    match vector {
        DIVIDE_ERROR => "divide error",
        DEBUG => "debug",
        NMI => "non-maskable interrupt",
        BREAKPOINT => "breakpoint",
        OVERFLOW => "overflow",
        BOUND_RANGE => "bound range exceeded",
        INVALID_OPCODE => "invalid opcode",
        DEVICE_NOT_AVAILABLE => "device not available",
        DOUBLE_FAULT => "double fault",
        COPROCESSOR_SEGMENT => "coprocessor segment overrun",
        INVALID_TSS => "invalid TSS",
        SEGMENT_NOT_PRESENT => "segment not present",
        STACK_SEGMENT => "stack-segment fault",
        GENERAL_PROTECTION => "general protection fault",
        PAGE_FAULT => "page fault",
        X87_FPU => "x87 floating-point exception",
        ALIGNMENT_CHECK => "alignment check",
        MACHINE_CHECK => "machine check",
        SIMD_FP => "SIMD floating-point exception",
        VIRTUALIZATION => "virtualization exception",
        CONTROL_PROTECTION => "control protection exception",
        HYPERVISOR_INJECTION => "hypervisor injection exception",
        VMM_COMMUNICATION => "VMM communication exception",
        SECURITY_EXCEPTION => "security exception",
        15 | 22..=27 | 31 => "reserved",
        TIMER => "timer",
        SPURIOUS_CHECK => "IRQ7",
        33..=47 => "legacy IRQ",
        _ => "unassigned",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_set() {
        let expected = [
            0u8, 1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 14, 16, 17, 18, 19, 32, 39,
        ];
        for vector in 0..=255u8 {
            assert_eq!(is_supported(vector), expected.contains(&vector), "vector {}", vector);
        }
    }

    #[test]
    fn test_gaps_are_unsupported() {
        assert!(!is_supported(9));
        assert!(!is_supported(15));
        assert!(!is_supported(20));
        assert!(!is_supported(33));
        assert!(!is_supported(255));
    }

    #[test]
    fn test_error_code_vectors() {
        assert!(pushes_error_code(DOUBLE_FAULT));
        assert!(pushes_error_code(GENERAL_PROTECTION));
        assert!(pushes_error_code(PAGE_FAULT));
        assert!(!pushes_error_code(DIVIDE_ERROR));
        assert!(!pushes_error_code(BREAKPOINT));
        assert!(!pushes_error_code(TIMER));
        assert!(!pushes_error_code(SPURIOUS_CHECK));
    }

    #[test]
    fn test_names() {
        assert_eq!(name(PAGE_FAULT), "page fault");
        assert_eq!(name(TIMER), "timer");
        assert_eq!(name(15), "reserved");
        assert_eq!(name(200), "unassigned");
    }
}
