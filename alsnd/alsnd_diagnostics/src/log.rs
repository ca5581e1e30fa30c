use std::sync::Mutex;

/// An extra sink for log messages. Every message logged through the `l*!` macros
/// is forwarded to all registered loggers, in addition to being printed.
pub trait Logger: Send {
    fn log(&mut self, file: &'static str, line: u32, tag: &'static str, msg: &str);
}

lazy_static! {
    static ref LOGGERS: Mutex<Vec<Box<dyn Logger>>> = Mutex::new(vec![]);
}

#[inline]
pub fn emit_log_msg(file: &'static str, line: u32, tag: &'static str, msg: &str) {
    let mut loggers = LOGGERS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    loggers
        .iter_mut()
        .for_each(|logger| logger.log(file, line, tag, msg));
}

pub fn add_logger(logger: Box<dyn Logger>) {
    let mut loggers = LOGGERS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    loggers.push(logger);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Capture_Logger {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl Logger for Capture_Logger {
        fn log(&mut self, _file: &'static str, _line: u32, tag: &'static str, msg: &str) {
            self.lines.lock().unwrap().push(format!("{}: {}", tag, msg));
        }
    }

    #[test]
    fn registered_logger_receives_messages() {
        let lines = Arc::new(Mutex::new(vec![]));
        add_logger(Box::new(Capture_Logger {
            lines: lines.clone(),
        }));

        lwarn!("sound {} not found", 42);
        lok!("loaded {}", "click.wav");

        let lines = lines.lock().unwrap();
        assert!(lines.contains(&String::from("WARNING: sound 42 not found")));
        assert!(lines.contains(&String::from("OK: loaded click.wav")));
    }

    #[test]
    fn log_once_logs_only_once() {
        let lines = Arc::new(Mutex::new(vec![]));
        add_logger(Box::new(Capture_Logger {
            lines: lines.clone(),
        }));

        for _ in 0..3 {
            lwarn_once!("log_once_test", "only once please");
        }

        let lines = lines.lock().unwrap();
        let n = lines
            .iter()
            .filter(|l| l.as_str() == "WARNING: only once please")
            .count();
        assert_eq!(n, 1);
    }
}
