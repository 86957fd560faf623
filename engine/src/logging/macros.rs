/// Scoped logging: the event is emitted only when the scope table allows `$level`.
/// `$level` is one of `ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE`.
#[macro_export]
macro_rules! scoped_log {
    ($level:ident, $scope:expr, $($arg:tt)*) => {
        if $crate::logging::get_log_config().should_log($scope, $crate::logging::Level::$level) {
            $crate::logging::tracing::event!($crate::logging::Level::$level, scope = $scope, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! teleport_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "teleport", $($arg)*)
    };
}

#[macro_export]
macro_rules! physics_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "physics", $($arg)*)
    };
}

#[macro_export]
macro_rules! input_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "input", $($arg)*)
    };
}
