// Trace events for numerical safety nets.
//
// Expands to `tracing::trace!` with the `tracing` feature and to nothing
// otherwise, so hot paths carry no logging cost in minimal builds.

macro_rules! trace_fallback {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "plugmath", $($arg)+);
        }
    };
}
