//! Prelude

pub use crate::time::U32Ext as _stm32h5xx_console_time_U32Ext;
pub use crate::uart::ConsoleUartExt as _stm32h5xx_console_uart_ConsoleUartExt;

pub use fugit::{ExtU32 as _, RateExtU32 as _};
