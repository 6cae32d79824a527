//! Trap dispatch policy.
//!
//! | Vector | Action                                        |
//! |--------|-----------------------------------------------|
//! | 32     | Acknowledge, return                           |
//! | 39     | Acknowledge only if ISR bit 7 is set, return  |
//! | other  | Halt forever                                  |

use kestrel_common::vector::{SPURIOUS_CHECK, TIMER};
use kestrel_hal::{Halt, InterruptController};

use super::frame::TrapFrame;

/// In-service bit of IRQ7. Clear on a spurious IRQ7.
const IRQ7_IN_SERVICE: u8 = 1 << 7;

/// Acts on one trap.
///
/// Returns only for the timer tick and for IRQ7. Every other vector is fatal:
/// `halt` parks the CPU and nothing is logged, since the kernel has no way to
/// recover from an exception or an unexpected interrupt line.
pub fn dispatch<C, H>(frame: &TrapFrame, controller: &mut C, halt: &H)
where
    C: InterruptController + ?Sized,
    H: Halt + ?Sized,
{
    match frame.vector() {
        Some(TIMER) => controller.acknowledge(),
        Some(SPURIOUS_CHECK) => {
            if controller.in_service() & IRQ7_IN_SERVICE != 0 {
                controller.acknowledge();
            }
        }
        _ => halt.halt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    /// Counts acknowledgements and reports a fixed ISR value.
    struct MockController {
        isr: u8,
        acks: usize,
        isr_reads: usize,
    }

    impl MockController {
        fn new(isr: u8) -> Self {
            Self {
                isr,
                acks: 0,
                isr_reads: 0,
            }
        }
    }

    impl InterruptController for MockController {
        fn acknowledge(&mut self) {
            self.acks += 1;
        }

        fn in_service(&mut self) -> u8 {
            self.isr_reads += 1;
            self.isr
        }
    }

    /// Unwinds instead of parking so the test can observe the halt.
    struct PanicHalt;

    impl Halt for PanicHalt {
        fn halt(&self) -> ! {
            panic!("halted");
        }
    }

    fn frame(trapno: i64) -> TrapFrame {
        TrapFrame {
            trapno,
            ..TrapFrame::default()
        }
    }

    /// Runs the dispatcher and reports whether control came back.
    fn returns(trapno: i64, controller: &mut MockController) -> bool {
        let mut reached = false;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            dispatch(&frame(trapno), controller, &PanicHalt);
            reached = true;
        }));
        assert_eq!(result.is_ok(), reached);
        reached
    }

    #[test]
    fn test_timer_acknowledges_once() {
        let mut pic = MockController::new(0);
        assert!(returns(32, &mut pic));
        assert_eq!(pic.acks, 1);
        assert_eq!(pic.isr_reads, 0);
    }

    #[test]
    fn test_irq7_in_service_acknowledges() {
        let mut pic = MockController::new(0x80);
        assert!(returns(39, &mut pic));
        assert_eq!(pic.acks, 1);
        assert_eq!(pic.isr_reads, 1);
    }

    #[test]
    fn test_irq7_spurious_skips_acknowledge() {
        let mut pic = MockController::new(0x00);
        assert!(returns(39, &mut pic));
        assert_eq!(pic.acks, 0);
        assert_eq!(pic.isr_reads, 1);
    }

    #[test]
    fn test_irq7_only_checks_bit_7() {
        let mut pic = MockController::new(0x7F);
        assert!(returns(39, &mut pic));
        assert_eq!(pic.acks, 0);

        let mut pic = MockController::new(0xFF);
        assert!(returns(39, &mut pic));
        assert_eq!(pic.acks, 1);
    }

    #[test]
    fn test_general_protection_halts() {
        let mut pic = MockController::new(0x80);
        assert!(!returns(13, &mut pic));
        assert_eq!(pic.acks, 0);
        assert_eq!(pic.isr_reads, 0);
    }

    #[test]
    fn test_every_other_vector_halts() {
        for trapno in (0..=255).filter(|&v| v != 32 && v != 39) {
            let mut pic = MockController::new(0x80);
            assert!(!returns(trapno, &mut pic), "vector {} returned", trapno);
            assert_eq!(pic.acks, 0);
        }
    }

    #[test]
    fn test_out_of_range_trapno_halts() {
        let mut pic = MockController::new(0x80);
        assert!(!returns(-1, &mut pic));
        assert!(!returns(32 + 256, &mut pic));
        assert_eq!(pic.acks, 0);
    }
}
