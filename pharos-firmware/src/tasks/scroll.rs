//! Display scroll task
//!
//! The one and only steady-state task. The scroll loop busy-waits
//! between drive slices, which is fine here: nothing else needs the
//! core, and the slice cadence is the whole point.

use embassy_time::Delay;

use pharos_drivers::MessageScroller;
use pharos_hal_rp2040::FlexBank;

use crate::board::{BANK_A_LINES, BANK_B_LINES};

/// The concrete scroller for this board's banks.
pub type DisplayScroller = MessageScroller<
    FlexBank<'static, BANK_A_LINES>,
    FlexBank<'static, BANK_B_LINES>,
    Delay,
>;

/// Drives the display forever.
#[embassy_executor::task]
pub async fn scroll_task(mut scroller: DisplayScroller) -> ! {
    scroller.run()
}
