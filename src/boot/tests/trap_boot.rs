#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(kestrel_kernel::testutil::test_runner)]
#![reexport_test_harness_main = "test_main"]

use bootloader::{entry_point, BootInfo};
use core::arch::asm;
use core::panic::PanicInfo;
use kestrel_common::vector;
use kestrel_kernel::testutil::{exit_qemu, QemuExitCode};
use kestrel_kernel::trap::install;

entry_point!(main);

fn main(_boot_info: &'static BootInfo) -> ! {
    if kestrel_kernel::init().is_err() {
        exit_qemu(QemuExitCode::Failed);
    }
    test_main();
    exit_qemu(QemuExitCode::Success)
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    kestrel_kernel::testutil::test_panic_handler(info)
}

#[test_case]
fn loaded_table_matches_pointer() {
    let pointer = install::pointer().expect("table not installed");
    let loaded = x86_64::instructions::tables::sidt();
    assert_eq!(loaded.limit, 4095);
    assert_eq!(loaded.limit, pointer.limit());
    assert_eq!(loaded.base.as_u64(), pointer.base());
}

#[test_case]
fn only_supported_vectors_have_gates() {
    let table = install::table().expect("table not installed");
    for v in 0..=u8::MAX {
        let desc = table.get(v);
        if vector::is_supported(v) {
            assert_eq!(desc.attributes(), 0x8E);
            assert_eq!(desc.selector(), 0x08);
        } else {
            assert!(desc.is_empty());
        }
    }
}

#[test_case]
fn software_timer_trap_returns() {
    // SAFETY: vector 32 has a gate and the dispatcher returns for it.
    unsafe { asm!("int 32") };
}

#[test_case]
fn software_irq7_trap_returns() {
    // SAFETY: vector 39 has a gate; with nothing in service the dispatcher
    // returns without acknowledging.
    unsafe { asm!("int 39") };
}

#[test_case]
fn trap_returns_while_pic_lock_held() {
    let _held = kestrel_kernel::arch::x86_64::pic::PICS.lock();
    // SAFETY: as above. The trap path must not wait on the held lock.
    unsafe { asm!("int 32") };
}

#[test_case]
fn hardware_timer_ticks_return() {
    for _ in 0..5 {
        x86_64::instructions::hlt();
    }
}
