// Logging and clock helpers for the browser glue.

pub fn clog(msg: &str) {
    gloo::console::log!(msg);
}

pub fn cwarn(msg: &str) {
    gloo::console::warn!(msg);
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
