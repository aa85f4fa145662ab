use crate::stm32::{USART1, USART2, USART3};

use super::Instance;

// Implemented by all U(S)ART instances sharing the usart1 register layout
macro_rules! instances {
    ($($USARTX:ident),+) => {
        $(
            impl Instance for $USARTX {}

            impl crate::Sealed for $USARTX {}
        )+
    };
}

instances!(USART1, USART2, USART3);

#[cfg(feature = "rm0481")]
mod rm0481 {
    use crate::stm32::{UART4, UART5, USART6};

    use super::Instance;

    instances! { UART4, UART5, USART6 }
}
