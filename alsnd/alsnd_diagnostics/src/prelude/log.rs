use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

lazy_static! {
    pub static ref ONCE_LOGS: Mutex<HashSet<String>> = Mutex::new(HashSet::default());
}

static VERBOSE: AtomicBool = AtomicBool::new(false);

#[inline(always)]
pub fn is_verbose() -> bool {
    #[cfg(debug_assertions)]
    {
        VERBOSE.load(Ordering::Acquire)
    }
    #[cfg(not(debug_assertions))]
    {
        false
    }
}

#[inline(always)]
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Release);
}

// Returns true the first time it's called with `key`.
pub fn first_time_logging(key: &str) -> bool {
    let mut logs = ONCE_LOGS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if logs.contains(key) {
        false
    } else {
        logs.insert(String::from(key));
        true
    }
}

#[macro_export]
macro_rules! fatal {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        panic!("[ FATAL ] {}", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! log {
    ($prelude:tt, $($arg:expr),* $(,)*) => {{
        let msg = format!("{}", $($arg),*);
        println!("[ {} ] {}", $prelude, msg);
        $crate::log::emit_log_msg(file!(), line!(), $prelude, &msg);
    }};
}

#[macro_export]
macro_rules! elog {
    ($prelude:tt, $($arg:expr),* $(,)*) => {{
        let msg = format!("{}", $($arg),*);
        eprintln!("[ {} ] {}", $prelude, msg);
        $crate::log::emit_log_msg(file!(), line!(), $prelude, &msg);
    }};
}

#[macro_export]
macro_rules! lok {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log!("OK", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! lerr {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log!("ERROR", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! lwarn {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log!("WARNING", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! linfo {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log!("INFO", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! ldebug {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::elog!("DEBUG", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! lverbose {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        if $crate::prelude::is_verbose() {
            $crate::elog!("VERBOSE", format_args!($fmt, $($arg),*));
        }
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! ldebug {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        ()
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! lverbose {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        ()
    };
}

#[macro_export]
macro_rules! log_once {
    ($key: expr, $prelude: tt, $($arg: expr),* $(,)*) => {
        if $crate::prelude::first_time_logging($key) {
            $crate::log!($prelude, $($arg),*);
        }
    };
}

#[macro_export]
macro_rules! elog_once {
    ($key: expr, $prelude: tt, $($arg: expr),* $(,)*) => {
        if $crate::prelude::first_time_logging($key) {
            $crate::elog!($prelude, $($arg),*);
        }
    };
}

#[macro_export]
macro_rules! lok_once {
    ($key:expr, $fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log_once!($key, "OK", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! lerr_once {
    ($key:expr, $fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log_once!($key, "ERROR", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! lwarn_once {
    ($key:expr, $fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log_once!($key, "WARNING", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! linfo_once {
    ($key:expr, $fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log_once!($key, "INFO", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! ldebug_once {
    ($key:expr, $fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::elog_once!($key, "DEBUG", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! ldebug_once {
    ($key:expr, $fmt:tt $(,$arg:expr)* $(,)?) => {
        ()
    };
}
