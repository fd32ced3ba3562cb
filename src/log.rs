// ブラウザではconsole、ネイティブ（テスト）ではstderrへ出力
#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    eprintln!("{}", message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(message: &str) {
    eprintln!("warning: {}", message);
}

macro_rules! console_log {
    ($($t:tt)*) => { $crate::log::log(&format!($($t)*)) };
}

macro_rules! console_warn {
    ($($t:tt)*) => { $crate::log::warn(&format!($($t)*)) };
}

pub(crate) use console_log;
pub(crate) use console_warn;
