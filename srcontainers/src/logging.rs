use itertools::Itertools;
pub use log::{debug, error, info, trace, warn};

#[derive(Debug)]
pub enum VInitLoggingError {
    HomeDir,
    FernLogFile,
    FernSetLoggerError,
}
impl std::fmt::Display for VInitLoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:?}", self)
    }
}
impl std::error::Error for VInitLoggingError {}

fn dispatch() -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|formatcallback, fmtarguments_msg, logrecord| {
            formatcallback.finish(format_args!(
                "[{} {}({:?}) {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                logrecord.target(),
                std::thread::current().id(),
                logrecord.level(),
                fmtarguments_msg,
            ))
        })
        .level(if cfg!(debug_assertions) {log::LevelFilter::Trace} else {log::LevelFilter::Info})
}

fn apply_and_announce(dispatch_configured: fern::Dispatch) -> Result<(), VInitLoggingError> {
    dispatch_configured.apply().map_err(|_| VInitLoggingError::FernSetLoggerError)?;
    let fn_panic_handler_original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panicinfo| {
        error!("panic: {}", panicinfo);
        fn_panic_handler_original(panicinfo)
    }));
    info!(
        "Started: {}",
        std::env::args().format_with(/*sep*/ " ", |str_arg, formatter| {
            formatter(&format_args!("\"{}\"", str_arg))
        }),
    );
    Ok(())
}

/// Sends log records to `<home>/<str_log_basename>.log`.
pub fn init_logging(str_log_basename: &str) -> Result<(), VInitLoggingError> {
    apply_and_announce(dispatch()
        .chain(fern::log_file({
            dirs::home_dir()
                .ok_or(VInitLoggingError::HomeDir)?
                .join(format!("{str_log_basename}.log"))
        }).map_err(|_| VInitLoggingError::FernLogFile)?)
    )
}

pub fn init_logging_stderr() -> Result<(), VInitLoggingError> {
    apply_and_announce(dispatch().chain(std::io::stderr()))
}
