use cfg_if::cfg_if;
use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

cfg_if! {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    if #[cfg(feature = "console_error_panic_hook")] {
        pub use console_error_panic_hook::set_once as set_panic_hook;
    } else {
        #[inline]
        pub fn set_panic_hook() {}
    }
}

cfg_if! {
    // Outside the browser (unit tests on the host) there is no console
    // object to call into, so fall back to stdio.
    if #[cfg(target_arch = "wasm32")] {
        pub fn log(msg: &str) {
            web_sys::console::log_1(&msg.into());
        }

        pub fn error(msg: &str) {
            web_sys::console::error_1(&msg.into());
        }
    } else {
        pub fn log(msg: &str) {
            println!("{}", msg);
        }

        pub fn error(msg: &str) {
            eprintln!("{}", msg);
        }
    }
}

/// `println!`-style logging to the browser console.
#[macro_export]
macro_rules! console_logf {
    ($($t:tt)*) => ($crate::utils::log(&format!($($t)*)))
}

/// `eprintln!`-style logging to the browser console's error channel.
#[macro_export]
macro_rules! console_errorf {
    ($($t:tt)*) => ($crate::utils::error(&format!($($t)*)))
}

/// Resolves after `ms` milliseconds, via `setTimeout`.
pub fn sleep(window: &Window, ms: i32) -> JsFuture {
    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        {
            let _ = reject.call1(&wasm_bindgen::JsValue::NULL, &e);
        }
    });
    JsFuture::from(promise)
}
