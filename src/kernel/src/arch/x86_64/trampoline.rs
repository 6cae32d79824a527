//! Per-vector trap entry stubs.
//!
//! Each stub makes the stack look the same regardless of vector: vectors
//! without a CPU error code push a zero placeholder, then every stub pushes
//! its vector number. The shared tail pushes the general-purpose registers in
//! reverse [`TrapFrame`](crate::trap::TrapFrame) order, hands `rsp` to
//! [`trap_entry`](super::interrupts::trap_entry) and unwinds the same way.
//!
//! Stack on entry to the tail is 16-byte aligned plus 8, so after 15 pushes
//! the `call` sees the alignment the System V ABI expects.

use kestrel_hal::TrapEntries;

core::arch::global_asm!(
    ".pushsection .text.trap_vectors, \"ax\"",
    // no error code
    ".global trap_vector_0",
    "trap_vector_0:",
    "    push 0",
    "    push 0",
    "    jmp trap_common",
    ".global trap_vector_1",
    "trap_vector_1:",
    "    push 0",
    "    push 1",
    "    jmp trap_common",
    ".global trap_vector_2",
    "trap_vector_2:",
    "    push 0",
    "    push 2",
    "    jmp trap_common",
    ".global trap_vector_3",
    "trap_vector_3:",
    "    push 0",
    "    push 3",
    "    jmp trap_common",
    ".global trap_vector_4",
    "trap_vector_4:",
    "    push 0",
    "    push 4",
    "    jmp trap_common",
    ".global trap_vector_5",
    "trap_vector_5:",
    "    push 0",
    "    push 5",
    "    jmp trap_common",
    ".global trap_vector_6",
    "trap_vector_6:",
    "    push 0",
    "    push 6",
    "    jmp trap_common",
    ".global trap_vector_7",
    "trap_vector_7:",
    "    push 0",
    "    push 7",
    "    jmp trap_common",
    // error code pushed by the CPU
    ".global trap_vector_8",
    "trap_vector_8:",
    "    push 8",
    "    jmp trap_common",
    ".global trap_vector_10",
    "trap_vector_10:",
    "    push 10",
    "    jmp trap_common",
    ".global trap_vector_11",
    "trap_vector_11:",
    "    push 11",
    "    jmp trap_common",
    ".global trap_vector_12",
    "trap_vector_12:",
    "    push 12",
    "    jmp trap_common",
    ".global trap_vector_13",
    "trap_vector_13:",
    "    push 13",
    "    jmp trap_common",
    ".global trap_vector_14",
    "trap_vector_14:",
    "    push 14",
    "    jmp trap_common",
    // no error code
    ".global trap_vector_16",
    "trap_vector_16:",
    "    push 0",
    "    push 16",
    "    jmp trap_common",
    // error code pushed by the CPU
    ".global trap_vector_17",
    "trap_vector_17:",
    "    push 17",
    "    jmp trap_common",
    // no error code
    ".global trap_vector_18",
    "trap_vector_18:",
    "    push 0",
    "    push 18",
    "    jmp trap_common",
    ".global trap_vector_19",
    "trap_vector_19:",
    "    push 0",
    "    push 19",
    "    jmp trap_common",
    ".global trap_vector_32",
    "trap_vector_32:",
    "    push 0",
    "    push 32",
    "    jmp trap_common",
    ".global trap_vector_39",
    "trap_vector_39:",
    "    push 0",
    "    push 39",
    "    jmp trap_common",
    // shared tail
    "trap_common:",
    "    push rax",
    "    push rbx",
    "    push rcx",
    "    push rdx",
    "    push rsi",
    "    push rdi",
    "    push rbp",
    "    push r8",
    "    push r9",
    "    push r10",
    "    push r11",
    "    push r12",
    "    push r13",
    "    push r14",
    "    push r15",
    "    mov rdi, rsp",
    "    cld",
    "    call {entry}",
    "    pop r15",
    "    pop r14",
    "    pop r13",
    "    pop r12",
    "    pop r11",
    "    pop r10",
    "    pop r9",
    "    pop r8",
    "    pop rbp",
    "    pop rdi",
    "    pop rsi",
    "    pop rdx",
    "    pop rcx",
    "    pop rbx",
    "    pop rax",
    // vector number and error code
    "    add rsp, 16",
    "    iretq",
    ".popsection",
    entry = sym super::interrupts::trap_entry,
);

extern "C" {
    fn trap_vector_0();
    fn trap_vector_1();
    fn trap_vector_2();
    fn trap_vector_3();
    fn trap_vector_4();
    fn trap_vector_5();
    fn trap_vector_6();
    fn trap_vector_7();
    fn trap_vector_8();
    fn trap_vector_10();
    fn trap_vector_11();
    fn trap_vector_12();
    fn trap_vector_13();
    fn trap_vector_14();
    fn trap_vector_16();
    fn trap_vector_17();
    fn trap_vector_18();
    fn trap_vector_19();
    fn trap_vector_32();
    fn trap_vector_39();
}

/// The assembly stubs above, as seen by the installer.
pub struct Trampolines;

impl TrapEntries for Trampolines {
    fn entry_address(&self, vector: u8) -> Option<u64> {
        let entry: unsafe extern "C" fn() = match vector {
            0 => trap_vector_0,
            1 => trap_vector_1,
            2 => trap_vector_2,
            3 => trap_vector_3,
            4 => trap_vector_4,
            5 => trap_vector_5,
            6 => trap_vector_6,
            7 => trap_vector_7,
            8 => trap_vector_8,
            10 => trap_vector_10,
            11 => trap_vector_11,
            12 => trap_vector_12,
            13 => trap_vector_13,
            14 => trap_vector_14,
            16 => trap_vector_16,
            17 => trap_vector_17,
            18 => trap_vector_18,
            19 => trap_vector_19,
            32 => trap_vector_32,
            39 => trap_vector_39,
            _ => return None,
        };
        Some(entry as usize as u64)
    }
}
